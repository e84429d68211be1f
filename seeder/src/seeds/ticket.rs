use crate::seed::Seeder;
use db::models::{
    ticket::{TicketPriority, TicketStatus},
    user_role::Role,
};
use sea_orm::DatabaseConnection;
use services::{
    ServiceError,
    ticket_service::{CreateTicket, TicketService},
    user_service::UserService,
    workflow::StatusChange,
};

pub struct TicketSeeder;

const TITLES: [&str; 6] = [
    "Printer down",
    "VPN drops every hour",
    "Laptop fan noise",
    "Cannot access shared drive",
    "Email not syncing",
    "Monitor flickers",
];

const DESCRIPTIONS: [&str; 5] = [
    "Reported by phone.",
    "Started after the latest update.",
    "Affects the whole floor.",
    "Intermittent, hard to reproduce.",
    "User needs it fixed before noon.",
];

const PRIORITIES: [TicketPriority; 3] = [
    TicketPriority::High,
    TicketPriority::Medium,
    TicketPriority::Low,
];

fn pick<T: Copy>(items: &[T]) -> T {
    items[fastrand::usize(..items.len())]
}

#[async_trait::async_trait]
impl Seeder for TicketSeeder {
    async fn seed(&self, db: &DatabaseConnection) -> Result<(), ServiceError> {
        let technicians = UserService::list(db, Some(Role::Technician)).await?;

        for _ in 0..24 {
            let assignee = (!technicians.is_empty() && fastrand::bool())
                .then(|| &technicians[fastrand::usize(..technicians.len())].user);

            let ticket = TicketService::create(
                db,
                CreateTicket {
                    name: pick(&TITLES).into(),
                    priority: Some(pick(&PRIORITIES)),
                    creator: "Front desk".into(),
                    description: pick(&DESCRIPTIONS).into(),
                    assigned_to_id: assignee.map(|u| u.id.clone()),
                    assigned_to_name: assignee.map(|u| u.full_name.clone()),
                },
            )
            .await?;

            let change = match pick(&TicketStatus::ALL) {
                TicketStatus::NotStarted => continue,
                TicketStatus::InProgress => StatusChange::InProgress,
                status @ TicketStatus::OnHold => StatusChange::from_parts(
                    status,
                    None,
                    None,
                    Some("Waiting on replacement parts".into()),
                )?,
                status @ TicketStatus::Solved => StatusChange::from_parts(
                    status,
                    Some("Outdated driver".into()),
                    Some("Reinstalled the driver".into()),
                    None,
                )?,
            };
            TicketService::update_status(db, ticket.id, change).await?;
        }

        Ok(())
    }
}
