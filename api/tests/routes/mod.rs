mod health_test;
mod tickets;
mod users;
