// ============================================================================
// RESOURCE PAGE VIEW - Pantalla de gestión genérica (clases, usuarios)
// ============================================================================
// Lista de tarjetas + modal de alta + modal de edición + alertas. Todo el
// estado vive en el CrudViewModel; la vista solo repinta al recibir cambios.
// ============================================================================

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys::Element;

use crate::dom::{
    append_child, clear_children, form_value, hide, on_click, on_submit, query_all, require_element,
    reset_form, set_disabled, set_form_value, show, ElementBuilder,
};
use crate::models::{Resource, ResourceForm};
use crate::state::AppContext;
use crate::viewmodels::{load_faculty_options, Card, CrudViewModel, FacultyOption, ListView, Presentable};
use crate::views::alerts::{render_alert, retry_button, schedule_dismiss};

/// IDs de la página, derivados del nombre del recurso
/// (`classesContainer`, `createClassForm`, `editClassModal`, ...)
pub struct PageIds {
    pub container: String,
    pub create_form: String,
    pub create_modal: String,
    pub edit_form: String,
    pub edit_modal: String,
}

impl PageIds {
    pub fn for_resource<R: Resource>() -> Self {
        Self {
            container: format!("{}Container", R::PLURAL),
            create_form: format!("create{}Form", R::TITLE),
            create_modal: format!("create{}Modal", R::TITLE),
            edit_form: format!("edit{}Form", R::TITLE),
            edit_modal: format!("edit{}Modal", R::TITLE),
        }
    }
}

struct Page<R: Resource> {
    vm: Rc<CrudViewModel<R>>,
    container: Element,
    create_form: Element,
    create_modal: Element,
    edit_form: Element,
    edit_modal: Element,
    create_submit: Option<Element>,
    edit_submit: Option<Element>,
    retry: Element,
    /// Secuencia de la última alerta pintada, para programar su cierre una sola vez
    shown_alert: Cell<u64>,
    /// Valores escritos en cada formulario; None mientras el modal está cerrado
    shown_create: RefCell<Option<R::Form>>,
    shown_edit: RefCell<Option<R::Form>>,
}

pub fn mount_resource_page<R>(ctx: AppContext, with_faculty: bool) -> Result<(), JsValue>
where
    R: Resource + Presentable + 'static,
{
    log::info!("🎬 [{}] Montando pantalla de gestión", R::TITLE);
    let ids = PageIds::for_resource::<R>();
    let create_form = require_element(&ids.create_form)?;
    let edit_form = require_element(&ids.edit_form)?;
    let page = Rc::new(Page {
        vm: Rc::new(CrudViewModel::<R>::new(ctx.clone())),
        container: require_element(&ids.container)?,
        create_submit: create_form.query_selector("button[type=\"submit\"]")?,
        edit_submit: edit_form.query_selector("button[type=\"submit\"]")?,
        create_form,
        create_modal: require_element(&ids.create_modal)?,
        edit_form,
        edit_modal: require_element(&ids.edit_modal)?,
        retry: retry_button("alertRetryButton")?,
        shown_alert: Cell::new(0),
        shown_create: RefCell::new(None),
        shown_edit: RefCell::new(None),
    });

    {
        // La página vive mientras el controlador la tenga suscrita
        let page_ref = page.clone();
        page.vm.state().subscribe(move || {
            if let Err(e) = render(&page_ref) {
                log::error!("❌ [{}] Error repintando: {:?}", R::TITLE, e);
            }
        });
    }

    bind_actions(&page)?;

    if with_faculty {
        let vm = page.vm.clone();
        spawn_local(async move {
            let (options, alert) = load_faculty_options(&ctx).await;
            if let Err(e) = fill_faculty_selects(&options) {
                log::error!("❌ [FACULTY] Error rellenando desplegables: {:?}", e);
            }
            if let Some(alert) = alert {
                vm.show_alert(alert);
            }
        });
    }

    let vm = page.vm.clone();
    spawn_local(async move {
        vm.list().await;
    });
    Ok(())
}

fn bind_actions<R>(page: &Rc<Page<R>>) -> Result<(), JsValue>
where
    R: Resource + Presentable + 'static,
{
    for button in query_all("[data-action=\"create\"]")? {
        let vm = page.vm.clone();
        on_click(&button, move |_| vm.open_create())?;
    }
    for button in query_all("[data-action=\"close-create\"]")? {
        let vm = page.vm.clone();
        on_click(&button, move |_| vm.close_create())?;
    }
    for button in query_all("[data-action=\"close-edit\"]")? {
        let vm = page.vm.clone();
        on_click(&button, move |_| vm.close_edit())?;
    }
    {
        let vm = page.vm.clone();
        on_click(&page.retry, move |_| {
            let vm = vm.clone();
            spawn_local(async move {
                vm.retry_last().await;
            });
        })?;
    }

    {
        let vm = page.vm.clone();
        let form = page.create_form.clone();
        on_submit(&page.create_form, move || {
            let vm = vm.clone();
            let values = R::Form::from_fields(&|name: &str| form_value(&form, name));
            spawn_local(async move {
                vm.create(values).await;
            });
        })?;
    }
    {
        let vm = page.vm.clone();
        let form = page.edit_form.clone();
        on_submit(&page.edit_form, move || {
            let vm = vm.clone();
            let values = R::Form::from_fields(&|name: &str| form_value(&form, name));
            spawn_local(async move {
                vm.submit_edit(values).await;
            });
        })?;
    }
    Ok(())
}

fn render<R>(page: &Rc<Page<R>>) -> Result<(), JsValue>
where
    R: Resource + Presentable + 'static,
{
    let state = page.vm.snapshot();

    clear_children(&page.container);
    match page.vm.view() {
        ListView::Empty(message) => {
            let empty = ElementBuilder::new("p")?.class("text-gray-500").text(message).build();
            append_child(&page.container, &empty)?;
        }
        ListView::Cards(cards) => {
            for card in cards {
                append_child(&page.container, &render_card(&page.vm, &card, state.busy)?)?;
            }
        }
    }

    render_dialog(
        &page.create_modal,
        &page.create_form,
        state.create_dialog.open.then_some(&state.create_dialog.form),
        &page.shown_create,
    )?;
    render_dialog(
        &page.edit_modal,
        &page.edit_form,
        state.edit_dialog.open.then_some(&state.edit_dialog.form),
        &page.shown_edit,
    )?;

    for submit in [&page.create_submit, &page.edit_submit].into_iter().flatten() {
        set_disabled(submit, state.busy);
    }
    set_disabled(&page.retry, state.busy);

    render_alert(state.alert.as_ref(), &page.retry)?;
    if let Some(alert) = &state.alert {
        if page.shown_alert.get() != state.alert_seq {
            page.shown_alert.set(state.alert_seq);
            let weak = Rc::downgrade(&page.vm);
            let seq = state.alert_seq;
            schedule_dismiss(alert, move || {
                if let Some(vm) = weak.upgrade() {
                    vm.dismiss_alert_if(seq);
                }
            });
        }
    }
    Ok(())
}

/// Los campos solo se reescriben si cambian los valores del estado, para no
/// pisar lo que el usuario está escribiendo en un repintado cualquiera
fn render_dialog<F: ResourceForm>(
    modal: &Element,
    form: &Element,
    values: Option<&F>,
    shown: &RefCell<Option<F>>,
) -> Result<(), JsValue> {
    let Some(values) = values else {
        *shown.borrow_mut() = None;
        return hide(modal);
    };
    if shown.borrow().as_ref() != Some(values) {
        reset_form(form);
        for (name, value) in values.to_fields() {
            set_form_value(form, name, &value);
        }
        *shown.borrow_mut() = Some(values.clone());
    }
    show(modal)
}

fn render_card<R>(vm: &Rc<CrudViewModel<R>>, card: &Card, busy: bool) -> Result<Element, JsValue>
where
    R: Resource + 'static,
{
    let heading = ElementBuilder::new("div")?
        .child(ElementBuilder::new("h3")?.class("font-medium").text(&card.title).build())?;
    let heading = card.subtitle_lines.iter().try_fold(heading, |el, line| {
        el.child(ElementBuilder::new("p")?.class("text-sm text-gray-600").text(line).build())
    })?;

    let badge = ElementBuilder::new("span")?
        .class(&format!("px-2 py-1 text-sm rounded {}", card.badge.class))
        .text(&card.badge.label)
        .build();

    let header = ElementBuilder::new("div")?
        .class("flex justify-between items-start mb-2")
        .child(heading.build())?
        .child(badge)?
        .build();

    let body = card.body_lines.iter().try_fold(ElementBuilder::new("div")?.class("mt-2"), |el, line| {
        el.child(ElementBuilder::new("p")?.class("text-sm mt-1").text(line).build())
    })?;

    let edit = ElementBuilder::new("button")?
        .class("px-3 py-1 text-sm bg-blue-500 text-white rounded hover:bg-blue-600")
        .attr("type", "button")?
        .text("Edit")
        .build();
    set_disabled(&edit, busy);
    {
        let vm = vm.clone();
        let id = card.id.clone();
        on_click(&edit, move |_| {
            let vm = vm.clone();
            let id = id.clone();
            spawn_local(async move {
                vm.read_for_edit(&id).await;
            });
        })?;
    }

    let delete = ElementBuilder::new("button")?
        .class("px-3 py-1 text-sm bg-red-500 text-white rounded hover:bg-red-600")
        .attr("type", "button")?
        .text("Delete")
        .build();
    set_disabled(&delete, busy);
    {
        let vm = vm.clone();
        let id = card.id.clone();
        on_click(&delete, move |_| {
            let vm = vm.clone();
            let id = id.clone();
            spawn_local(async move {
                vm.delete(&id).await;
            });
        })?;
    }

    let actions = ElementBuilder::new("div")?
        .class("flex gap-2 mt-4")
        .child(edit)?
        .child(delete)?
        .build();

    Ok(ElementBuilder::new("div")?
        .class("p-4 bg-white rounded-lg shadow-sm hover:shadow-md transition-shadow")
        .child(header)?
        .child(body.build())?
        .child(actions)?
        .build())
}

/// Rellena todos los `.faculty-select` con el placeholder y los profesores
fn fill_faculty_selects(options: &[FacultyOption]) -> Result<(), JsValue> {
    for select in query_all(".faculty-select")? {
        clear_children(&select);
        for option in options {
            let el = ElementBuilder::new("option")?
                .attr("value", &option.id)?
                .text(&option.label)
                .build();
            append_child(&select, &el)?;
        }
    }
    Ok(())
}
