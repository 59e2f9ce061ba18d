//! The fixed slide collection of the services page.

use super::ServiceCategory;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Slide {
    pub id: &'static str,
    pub category: ServiceCategory,
    pub icon: &'static str,
    pub title: &'static str,
    pub body: &'static str,
}

pub const SERVICE_SLIDES: &[Slide] = &[
    Slide {
        id: "home-support",
        category: ServiceCategory::Individual,
        icon: "bi bi-laptop",
        title: "Device Setup & Repair",
        body: "Laptops, desktops, phones and printers configured, repaired and kept up to date.",
    },
    Slide {
        id: "enterprise-cloud",
        category: ServiceCategory::Corporate,
        icon: "bi bi-cloud-arrow-up",
        title: "Cloud Infrastructure",
        body: "Design, migration and operation of hybrid cloud platforms sized for your workload.",
    },
    Slide {
        id: "home-network",
        category: ServiceCategory::Individual,
        icon: "bi bi-wifi",
        title: "Home Networking",
        body: "Whole-home Wi-Fi, smart devices and parental controls that simply work.",
    },
    Slide {
        id: "enterprise-security",
        category: ServiceCategory::Corporate,
        icon: "bi bi-shield-lock",
        title: "Cybersecurity",
        body: "Audits, endpoint protection and incident response for teams of every size.",
    },
    Slide {
        id: "home-backup",
        category: ServiceCategory::Individual,
        icon: "bi bi-hdd-stack",
        title: "Data Backup & Recovery",
        body: "Automatic backups of photos and documents, and recovery when disaster strikes.",
    },
    Slide {
        id: "enterprise-managed",
        category: ServiceCategory::Corporate,
        icon: "bi bi-headset",
        title: "Managed IT Support",
        body: "A dedicated helpdesk and proactive monitoring for your whole organisation.",
    },
];
