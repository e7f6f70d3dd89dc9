// Utilidades compartidas por los tests: transporte guionizado y contexto en memoria

use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;

use async_trait::async_trait;

use crate::config::AppConfig;
use crate::models::{Session, User, UserType};
use crate::platform::memory::{InstantTimer, MemoryStorage, RecordingNavigator, ScriptedConfirmer};
use crate::services::{HttpRequest, HttpResponse, HttpTransport, TransportError};
use crate::state::{AppContext, Platform};
use crate::utils::routes::Page;

pub enum Reply {
    Respond { status: u16, body: String },
    Fail(TransportError),
    /// Nunca responde; lo corta el timeout
    Hang,
}

impl Reply {
    pub fn json(status: u16, body: &str) -> Self {
        Reply::Respond {
            status,
            body: body.to_string(),
        }
    }
}

#[derive(Default)]
pub struct MockTransport {
    script: RefCell<VecDeque<Reply>>,
    requests: RefCell<Vec<HttpRequest>>,
}

impl MockTransport {
    pub fn reply(&self, reply: Reply) {
        self.script.borrow_mut().push_back(reply);
    }

    pub fn request_count(&self) -> usize {
        self.requests.borrow().len()
    }

    pub fn requests(&self) -> Vec<HttpRequest> {
        self.requests.borrow().clone()
    }

    pub fn last_request(&self) -> Option<HttpRequest> {
        self.requests.borrow().last().cloned()
    }
}

#[async_trait(?Send)]
impl HttpTransport for MockTransport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, TransportError> {
        self.requests.borrow_mut().push(request);
        let next = self.script.borrow_mut().pop_front();
        match next {
            Some(Reply::Respond { status, body }) => Ok(HttpResponse { status, body }),
            Some(Reply::Fail(error)) => Err(error),
            Some(Reply::Hang) => {
                futures::future::pending::<()>().await;
                Err(TransportError::Unreachable("unreachable".into()))
            }
            None => Err(TransportError::Unreachable("no scripted reply".into())),
        }
    }
}

pub struct TestHarness {
    pub ctx: AppContext,
    pub transport: Rc<MockTransport>,
    pub storage: Rc<MemoryStorage>,
    pub navigator: Rc<RecordingNavigator>,
    pub confirmer: Rc<ScriptedConfirmer>,
}

impl TestHarness {
    pub fn new() -> Self {
        Self::on_page(Page::Login)
    }

    pub fn on_page(page: Page) -> Self {
        let transport = Rc::new(MockTransport::default());
        let storage = Rc::new(MemoryStorage::new());
        let navigator = Rc::new(RecordingNavigator::new());
        let confirmer = Rc::new(ScriptedConfirmer::new());
        let platform = Platform {
            storage: storage.clone(),
            transport: transport.clone(),
            navigator: navigator.clone(),
            confirmer: confirmer.clone(),
            timer: Rc::new(InstantTimer),
        };
        Self {
            ctx: AppContext::new(AppConfig::default(), page, platform),
            transport,
            storage,
            navigator,
            confirmer,
        }
    }

    /// Sesión ya iniciada sobre una pantalla de administración
    pub fn signed_in(session: Session) -> Self {
        Self::signed_in_on(Page::ManageClasses, session)
    }

    pub fn signed_in_on(page: Page, session: Session) -> Self {
        let harness = Self::on_page(page);
        harness
            .ctx
            .session
            .set(&session)
            .expect("memory storage accepts the session");
        harness
    }
}

pub fn session_as(user_type: UserType) -> Session {
    Session::new(
        format!("tok-{}", user_type),
        User {
            id: format!("{}-id", user_type),
            username: format!("{}1", user_type),
            email: format!("{}@school.test", user_type),
            user_type,
        },
    )
}

pub fn admin_session() -> Session {
    session_as(UserType::Admin)
}
