//! Shipment tracking backed by a fixed table of known tracking numbers.

use serde::Serialize;
use strum_macros::Display;
use utoipa::ToSchema;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema, Display)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum ShipmentStatus {
    Processing,
    Shipped,
    InTransit,
    OutForDelivery,
    Delivered,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct TrackingStep {
    pub title: String,
    pub description: String,
    pub location: Option<String>,
    pub timestamp: Option<String>,
    pub completed: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct TrackingInfo {
    pub tracking_number: String,
    pub order_id: String,
    pub status: ShipmentStatus,
    pub carrier: String,
    pub estimated_delivery: String,
    pub shipping_address: String,
    pub steps: Vec<TrackingStep>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
pub struct TrackingProgress {
    pub completed: usize,
    pub total: usize,
}

impl TrackingInfo {
    pub fn progress(&self) -> TrackingProgress {
        TrackingProgress {
            completed: self.steps.iter().filter(|s| s.completed).count(),
            total: self.steps.len(),
        }
    }

    pub fn current_step(&self) -> Option<&TrackingStep> {
        self.steps.iter().rev().find(|s| s.completed)
    }
}

struct StepFixture {
    title: &'static str,
    description: &'static str,
    location: &'static str,
}

struct ShipmentFixture {
    tracking_number: &'static str,
    order_id: &'static str,
    status: ShipmentStatus,
    carrier: &'static str,
    estimated_delivery: &'static str,
    shipping_address: &'static str,
    completed_steps: usize,
    timestamps: [&'static str; 6],
}

const TIMELINE: [StepFixture; 6] = [
    StepFixture {
        title: "Order Placed",
        description: "Your order has been received",
        location: "Online",
    },
    StepFixture {
        title: "Order Confirmed",
        description: "Payment verified and order confirmed",
        location: "Online",
    },
    StepFixture {
        title: "Processing",
        description: "Your items are being picked and packed",
        location: "Fulfilment Center",
    },
    StepFixture {
        title: "Shipped",
        description: "Your package has left our warehouse",
        location: "Distribution Hub",
    },
    StepFixture {
        title: "Out for Delivery",
        description: "Your package is on its way to you",
        location: "Local Courier",
    },
    StepFixture {
        title: "Delivered",
        description: "Your package has been delivered",
        location: "Destination",
    },
];

const SHIPMENTS: [ShipmentFixture; 3] = [
    ShipmentFixture {
        tracking_number: "TRK123456789",
        order_id: "ORD-2024-001",
        status: ShipmentStatus::Delivered,
        carrier: "Express Logistics",
        estimated_delivery: "2024-01-20",
        shipping_address: "123 Main Street, New York, NY 10001",
        completed_steps: 6,
        timestamps: [
            "2024-01-15 10:30",
            "2024-01-15 11:00",
            "2024-01-16 09:15",
            "2024-01-17 14:20",
            "2024-01-20 08:45",
            "2024-01-20 15:30",
        ],
    },
    ShipmentFixture {
        tracking_number: "TRK987654321",
        order_id: "ORD-2024-002",
        status: ShipmentStatus::InTransit,
        carrier: "Swift Courier",
        estimated_delivery: "2024-02-05",
        shipping_address: "45 Harbour Road, Seattle, WA 98101",
        completed_steps: 4,
        timestamps: [
            "2024-02-01 08:10",
            "2024-02-01 08:40",
            "2024-02-02 13:05",
            "2024-02-03 07:55",
            "",
            "",
        ],
    },
    ShipmentFixture {
        tracking_number: "TRK456789123",
        order_id: "ORD-2024-003",
        status: ShipmentStatus::Processing,
        carrier: "Express Logistics",
        estimated_delivery: "2024-02-12",
        shipping_address: "9 Elm Avenue, Austin, TX 73301",
        completed_steps: 2,
        timestamps: ["2024-02-07 16:20", "2024-02-07 16:45", "", "", "", ""],
    },
];

/// Tracking numbers are matched after trimming and upper-casing.
pub fn lookup(tracking_number: &str) -> Option<TrackingInfo> {
    let wanted = tracking_number.trim().to_ascii_uppercase();
    let fixture = SHIPMENTS.iter().find(|s| s.tracking_number == wanted)?;

    let steps = TIMELINE
        .iter()
        .zip(fixture.timestamps)
        .enumerate()
        .map(|(index, (step, timestamp))| {
            let completed = index < fixture.completed_steps;
            TrackingStep {
                title: step.title.to_string(),
                description: step.description.to_string(),
                location: completed.then(|| step.location.to_string()),
                timestamp: (completed && !timestamp.is_empty()).then(|| timestamp.to_string()),
                completed,
            }
        })
        .collect();

    Some(TrackingInfo {
        tracking_number: fixture.tracking_number.to_string(),
        order_id: fixture.order_id.to_string(),
        status: fixture.status,
        carrier: fixture.carrier.to_string(),
        estimated_delivery: fixture.estimated_delivery.to_string(),
        shipping_address: fixture.shipping_address.to_string(),
        steps,
    })
}
