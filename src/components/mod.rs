//! UI Components

mod cycle_list;
mod cycle_lists;
mod delete_confirm_button;
mod item_row;
mod new_list_input;

pub use cycle_list::CycleList;
pub use cycle_lists::CycleLists;
pub use delete_confirm_button::DeleteConfirmButton;
pub use item_row::ItemRow;
pub use new_list_input::NewListInput;
