//! Board components

mod activities_list;
mod activity_board;
mod activity_card;
mod confirm_dialog;
mod signup_form;
mod status_banner;

pub use activities_list::ActivitiesList;
pub use activity_board::ActivityBoard;
pub use activity_card::ActivityCardView;
pub use confirm_dialog::ConfirmDialog;
pub use signup_form::SignupFormView;
pub use status_banner::StatusBanner;
