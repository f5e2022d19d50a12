//! Fixed status codes, response messages and account defaults.

pub const DEFAULT_BRANCH_ADDRESS: &str = "123 Main Street, New York";

pub const STATUS_201: &str = "201";
pub const MESSAGE_201: &str = "Account created successfully";

pub const STATUS_200: &str = "200";
pub const MESSAGE_200: &str = "Request processed successfully";

pub const STATUS_417: &str = "417";
pub const MESSAGE_417_UPDATE: &str =
    "Update operation failed. Please try again or contact Dev team";
pub const MESSAGE_417_DELETE: &str =
    "Delete operation failed. Please try again or contact Dev team";
