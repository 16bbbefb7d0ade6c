pub mod session_viewmodel;
pub mod shell_viewmodel;

pub use session_viewmodel::SessionViewModel;
pub use shell_viewmodel::{redirect_for, select_view, ShellView};
