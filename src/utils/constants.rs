// Claves persistidas en localStorage
pub const TOKEN_KEY: &str = "token";
pub const CURRENT_USER_KEY: &str = "currentUser";

// Mensajes de conectividad
pub const MSG_OFFLINE: &str = "No internet connection. Please check your network.";
pub const MSG_UNREACHABLE: &str = "Unable to connect to server. Please ensure the server is running.";
pub const MSG_TIMEOUT: &str = "Request timed out. Please ensure the server is running.";
pub const MSG_UNPARSEABLE: &str = "Server error: Unable to process response";
pub const MSG_NOT_AUTHENTICATED: &str = "Not authenticated";

// Login
pub const MSG_INVALID_USERNAME: &str = "Invalid username format";
pub const MSG_SHORT_PASSWORD: &str = "Password must be at least 6 characters";
pub const MSG_INVALID_CREDENTIALS: &str = "Invalid credentials";
pub const MSG_USERNAME_HINT: &str =
    "Username must be at least 3 characters long and contain only letters and numbers";
pub const MSG_INVALID_USER_TYPE: &str = "Invalid user type";

// Signup
pub const MSG_SIGNUP_USERNAME: &str =
    "Username must be at least 3 characters long and contain only letters and numbers.";
pub const MSG_SIGNUP_PASSWORD: &str = "Password must be at least 6 characters.";
pub const MSG_PASSWORD_MISMATCH: &str = "Passwords do not match.";
pub const MSG_INVALID_EMAIL: &str = "Invalid email address.";
pub const MSG_ROLL_NUMBER_REQUIRED: &str = "Roll Number is required for students.";
pub const MSG_SIGNUP_FAILED: &str = "Signup failed. Please try again.";
pub const MSG_SIGNUP_SUCCESS: &str = "Signup successful! Redirecting...";

pub const MSG_INVALID_CAPACITY: &str = "Capacity must be a whole number of 0 or more";

pub const RETRY_LABEL: &str = "Retry Connection";
pub const FACULTY_PLACEHOLDER: &str = "Select Faculty";
