//! Fixture record types.
//!
//! These mirror the flat shape of the bundled JSON datasets. Each type
//! implements [`TableRow`] so it can be shown in a [`TableView`](crate::table::TableView).

use serde::{Deserialize, Serialize};

use crate::table::{CellValue, RowId, TableRow};

/// A conference event.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    pub id: String,
    pub name: String,
    pub city: String,
    pub start_date: String,
    pub end_date: String,
    pub status: String,
    pub budget_total: i64,
    pub currency: String,
    pub expected_attendees: u32,
}

impl TableRow for Event {
    fn id(&self) -> RowId {
        RowId::from(self.id.as_str())
    }

    fn cell(&self, key: &str) -> CellValue {
        match key {
            "id" => self.id.as_str().into(),
            "name" => self.name.as_str().into(),
            "city" => self.city.as_str().into(),
            "start_date" => self.start_date.as_str().into(),
            "end_date" => self.end_date.as_str().into(),
            "status" => self.status.as_str().into(),
            "budget_total" => self.budget_total.into(),
            "currency" => self.currency.as_str().into(),
            "expected_attendees" => self.expected_attendees.into(),
            _ => CellValue::Empty,
        }
    }
}

/// A speaker booked (or being booked) for an event.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Speaker {
    pub id: String,
    pub event_id: String,
    pub name: String,
    #[serde(default)]
    pub topics: Vec<String>,
    pub timezone: String,
    pub fee: i64,
    pub needs_accommodation: bool,
    pub status: String,
}

impl TableRow for Speaker {
    fn id(&self) -> RowId {
        RowId::from(self.id.as_str())
    }

    fn cell(&self, key: &str) -> CellValue {
        match key {
            "id" => self.id.as_str().into(),
            "event_id" => self.event_id.as_str().into(),
            "name" => self.name.as_str().into(),
            "topics" => self.topics.join(", ").into(),
            "timezone" => self.timezone.as_str().into(),
            "fee" => self.fee.into(),
            "needs_accommodation" => self.needs_accommodation.into(),
            "status" => self.status.as_str().into(),
            _ => CellValue::Empty,
        }
    }
}

/// A sponsor of an event.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Sponsor {
    pub id: String,
    pub event_id: String,
    pub company: String,
    pub tier: String,
    pub package_value: i64,
    pub contact: String,
    pub deliverables_due: Option<String>,
    pub invoice_status: String,
}

impl TableRow for Sponsor {
    fn id(&self) -> RowId {
        RowId::from(self.id.as_str())
    }

    fn cell(&self, key: &str) -> CellValue {
        match key {
            "id" => self.id.as_str().into(),
            "event_id" => self.event_id.as_str().into(),
            "company" => self.company.as_str().into(),
            "tier" => self.tier.as_str().into(),
            "package_value" => self.package_value.into(),
            "contact" => self.contact.as_str().into(),
            "deliverables_due" => self.deliverables_due.clone().into(),
            "invoice_status" => self.invoice_status.as_str().into(),
            _ => CellValue::Empty,
        }
    }
}

/// A candidate venue for an event.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Venue {
    pub id: String,
    pub event_id: String,
    pub name: String,
    pub address: String,
    pub capacity: u32,
    pub rooms: u32,
    pub daily_rate: f64,
    #[serde(default)]
    pub amenities: Vec<String>,
}

impl TableRow for Venue {
    fn id(&self) -> RowId {
        RowId::from(self.id.as_str())
    }

    fn cell(&self, key: &str) -> CellValue {
        match key {
            "id" => self.id.as_str().into(),
            "event_id" => self.event_id.as_str().into(),
            "name" => self.name.as_str().into(),
            "address" => self.address.as_str().into(),
            "capacity" => self.capacity.into(),
            "rooms" => self.rooms.into(),
            "daily_rate" => self.daily_rate.into(),
            "amenities" => self.amenities.join(", ").into(),
            _ => CellValue::Empty,
        }
    }
}

/// An attendee registration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Registration {
    pub id: i64,
    pub attendee: String,
    pub email: String,
    pub ticket_type: String,
    pub status: String,
    pub registered_at: String,
    pub amount: i64,
}

impl TableRow for Registration {
    fn id(&self) -> RowId {
        RowId::Int(self.id)
    }

    fn cell(&self, key: &str) -> CellValue {
        match key {
            "id" => self.id.into(),
            "attendee" => self.attendee.as_str().into(),
            "email" => self.email.as_str().into(),
            "ticket_type" => self.ticket_type.as_str().into(),
            "status" => self.status.as_str().into(),
            "registered_at" => self.registered_at.as_str().into(),
            "amount" => self.amount.into(),
            _ => CellValue::Empty,
        }
    }
}

/// A planning agent working on an event.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Agent {
    pub id: String,
    pub event_id: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub status: String,
    pub current_task: String,
    /// Percent complete, 0 to 100.
    pub progress: u32,
    #[serde(default)]
    pub decision_count: u32,
    pub updated_at: String,
}

impl TableRow for Agent {
    fn id(&self) -> RowId {
        RowId::from(self.id.as_str())
    }

    fn cell(&self, key: &str) -> CellValue {
        match key {
            "id" => self.id.as_str().into(),
            "event_id" => self.event_id.as_str().into(),
            "type" => self.kind.as_str().into(),
            "status" => self.status.as_str().into(),
            "current_task" => self.current_task.as_str().into(),
            "progress" => self.progress.into(),
            "decision_count" => self.decision_count.into(),
            "updated_at" => self.updated_at.as_str().into(),
            _ => CellValue::Empty,
        }
    }
}

/// A planning task, optionally owned by an agent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub id: String,
    pub event_id: String,
    pub title: String,
    pub assigned_to: String,
    #[serde(default)]
    pub agent: Option<String>,
    pub status: String,
    pub priority: String,
    pub due_date: String,
    #[serde(default)]
    pub dependencies: Vec<String>,
}

impl TableRow for Task {
    fn id(&self) -> RowId {
        RowId::from(self.id.as_str())
    }

    fn cell(&self, key: &str) -> CellValue {
        match key {
            "id" => self.id.as_str().into(),
            "event_id" => self.event_id.as_str().into(),
            "title" => self.title.as_str().into(),
            "assigned_to" => self.assigned_to.as_str().into(),
            "agent" => self.agent.clone().into(),
            "status" => self.status.as_str().into(),
            "priority" => self.priority.as_str().into(),
            "due_date" => self.due_date.as_str().into(),
            "dependencies" => self.dependencies.join(", ").into(),
            _ => CellValue::Empty,
        }
    }
}
