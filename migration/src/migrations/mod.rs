pub mod m202510170001_create_users;
pub mod m202510170002_create_user_roles;
pub mod m202510170003_create_tickets;
pub mod m202510170004_create_ticket_counters;
