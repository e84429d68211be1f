pub mod ticket;
pub mod ticket_counter;
pub mod user;
pub mod user_role;

pub use ticket::Entity as Ticket;
pub use ticket_counter::Entity as TicketCounter;
pub use user::Entity as User;
pub use user_role::Entity as UserRole;
