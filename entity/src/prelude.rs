pub use super::booking_lock::Entity as BookingLock;
pub use super::classroom::Entity as Classroom;
pub use super::notification::Entity as Notification;
pub use super::reservation::Entity as Reservation;
pub use super::study_room::Entity as StudyRoom;
pub use super::user::Entity as User;
