// Standalone components
pub mod badge;
pub mod button;
pub mod card;
pub mod data_table;
pub mod form_select;
pub mod input;
pub mod page_header;
pub mod search_bar;

// Primitive wrappers
pub mod dialog;
pub mod toast;

// Shell
pub mod navbar;
pub mod sidebar;

pub use badge::*;
pub use button::*;
pub use card::*;
pub use data_table::*;
pub use dialog::*;
pub use form_select::*;
pub use input::*;
pub use navbar::*;
pub use page_header::*;
pub use search_bar::*;
pub use sidebar::*;
pub use toast::*;
