pub mod card;
pub mod chart;
pub mod icon;
pub mod login;
pub mod login_gate;
pub mod shell;

pub use login_gate::LoginGate;
