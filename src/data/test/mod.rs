mod booking_lock;
mod notification;
mod reservation;
mod room;
mod user;
