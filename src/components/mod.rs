//! UI Components

mod attachments;
mod board;
mod card;
mod card_list;
mod delete_confirm_button;
mod drag_ghost;
mod drop_zone;
mod label_picker;
mod lazy_image;
mod notification;
mod open_card;
mod trash_zone;

pub use attachments::AttachmentList;
pub use board::Board;
pub use card::CardTile;
pub use card_list::CardListColumn;
pub use delete_confirm_button::DeleteConfirmButton;
pub use drag_ghost::DragGhost;
pub use drop_zone::DropZone;
pub use label_picker::LabelPicker;
pub use lazy_image::LazyImage;
pub use notification::NotificationArea;
pub use open_card::OpenCardDialog;
pub use trash_zone::TrashZone;
