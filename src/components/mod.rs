//! UI Components
//!
//! Pages and reusable Leptos components.

mod nav_bar;
mod toast_host;
mod delete_confirm_button;
mod protected_route;
mod wizard;
mod description_form;
mod questionnaire;
mod delivery_slider;
mod service_groups;
mod vendor_card;
mod auth_page;
mod ticket_dashboard;
mod ticket_card;
mod vendor_dashboard;
mod profile_page;

pub use nav_bar::NavBar;
pub use toast_host::ToastHost;
pub use delete_confirm_button::DeleteConfirmButton;
pub use protected_route::ProtectedRoute;
pub use wizard::Wizard;
pub use description_form::DescriptionForm;
pub use questionnaire::Questionnaire;
pub use delivery_slider::DeliveryTimeSlider;
pub use service_groups::ServiceGroups;
pub use vendor_card::VendorCard;
pub use auth_page::AuthPage;
pub use ticket_dashboard::TicketDashboard;
pub use ticket_card::TicketCard;
pub use vendor_dashboard::VendorDashboard;
pub use profile_page::ProfilePage;
