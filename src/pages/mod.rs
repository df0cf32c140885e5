mod about;
mod dashboard;
mod home;

pub use about::AboutPage;
pub use dashboard::DashboardPage;
pub use home::HomePage;
