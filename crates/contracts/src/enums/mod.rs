pub mod locale;
pub mod service_kind;
pub mod view_id;

pub use locale::{Direction, Locale};
pub use service_kind::ServiceKind;
pub use view_id::ViewId;
