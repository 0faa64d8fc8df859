pub use super::national_park::Entity as NationalPark;
pub use super::trail::Entity as Trail;
pub use super::user::Entity as User;
