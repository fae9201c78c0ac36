//! Page modules

pub mod dashboard;
pub mod kyc;
pub mod landing;
pub mod login;
pub mod register;
pub mod sale;
pub mod withdrawal;

pub use dashboard::DashboardPage;
pub use kyc::KycPage;
pub use landing::LandingPage;
pub use login::LoginPage;
pub use register::RegisterPage;
pub use sale::SalePage;
pub use withdrawal::WithdrawalPage;
