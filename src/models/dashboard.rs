//! Dashboard state and view model.
//!
//! `DashboardState` is what one aggregation pass over the four collections
//! produces; `DashboardView` is the fully rendered overview the admin
//! frontend displays. Rendering is a pure mapping with no IO so every
//! presentational rule here is testable in isolation.

use serde::Serialize;

use crate::models::order::{Order, STATUS_COMPLETED, STATUS_PENDING};

/// Collection counts shown on the stat tiles, each equal to the size of
/// the backing collection at fetch time.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct CountSummary {
    pub stores: u64,
    pub products: u64,
    pub orders: u64,
    pub users: u64,
}

/// The four collections the overview aggregates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DataSource {
    Stores,
    Products,
    Orders,
    Users,
}

impl std::fmt::Display for DataSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Stores => "stores",
            Self::Products => "products",
            Self::Orders => "orders",
            Self::Users => "users",
        };
        f.write_str(name)
    }
}

/// One collection read that failed during an aggregation pass. The
/// overview degrades that collection to its zero value and reports the
/// failure here instead of returning an error status.
#[derive(Debug, Clone, Serialize)]
pub struct SourceFailure {
    pub kind: DataSource,
    pub message: String,
}

/// Result of one aggregation pass over the four collections.
#[derive(Debug, Clone)]
pub struct DashboardState {
    pub loading: bool,
    pub counts: CountSummary,
    pub recent_orders: Vec<Order>,
    pub failures: Vec<SourceFailure>,
}

impl Default for DashboardState {
    /// The initial state before the first aggregation pass settles.
    fn default() -> Self {
        Self {
            loading: true,
            counts: CountSummary::default(),
            recent_orders: Vec::new(),
            failures: Vec::new(),
        }
    }
}

/// Status dot color shown next to an activity entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Indicator {
    Green,
    Yellow,
    Neutral,
}

impl Indicator {
    /// Completed orders get green, pending get yellow, and every other
    /// status (including a missing one) falls back to neutral.
    pub fn for_status(status: Option<&str>) -> Self {
        match status {
            Some(STATUS_COMPLETED) => Self::Green,
            Some(STATUS_PENDING) => Self::Yellow,
            _ => Self::Neutral,
        }
    }
}

/// One summary tile linking to a collection page. `value` is absent while
/// the overview is still loading so the client renders a placeholder.
#[derive(Debug, Clone, Serialize)]
pub struct StatTile {
    pub title: &'static str,
    pub value: Option<u64>,
    pub icon: &'static str,
    pub href: &'static str,
    pub accent: &'static str,
}

/// One row in the recent-activity feed.
#[derive(Debug, Clone, Serialize)]
pub struct ActivityEntry {
    pub order_id: i64,
    pub indicator: Indicator,
    pub headline: String,
    pub date: String,
    pub items_label: String,
}

impl ActivityEntry {
    fn from_order(order: &Order) -> Self {
        let status = order.status.as_deref().unwrap_or("UNKNOWN");
        Self {
            order_id: order.id,
            indicator: Indicator::for_status(order.status.as_deref()),
            headline: format!("Order #{} - {status}", order.id),
            date: order.created_at.format("%Y-%m-%d").to_string(),
            items_label: items_label(order.item_count()),
        }
    }
}

fn items_label(count: usize) -> String {
    if count == 1 {
        "1 item".to_string()
    } else {
        format!("{count} items")
    }
}

/// Page heading block.
#[derive(Debug, Clone, Serialize)]
pub struct Heading {
    pub title: &'static str,
    pub subtitle: &'static str,
}

/// Promotional card pointing at store management.
#[derive(Debug, Clone, Serialize)]
pub struct Callout {
    pub title: &'static str,
    pub body: &'static str,
    pub href: &'static str,
    pub link_label: &'static str,
}

/// Recent-activity feed. `empty_message` is only present when the feed
/// has settled with no entries.
#[derive(Debug, Serialize)]
pub struct ActivityFeed {
    pub entries: Vec<ActivityEntry>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub empty_message: Option<&'static str>,
}

const NO_RECENT_ACTIVITY: &str = "No recent activity.";

/// The rendered overview page.
#[derive(Debug, Serialize)]
pub struct DashboardView {
    pub loading: bool,
    pub heading: Heading,
    pub tiles: Vec<StatTile>,
    pub activity: ActivityFeed,
    pub callout: Callout,
    pub degraded_sources: Vec<SourceFailure>,
}

const TILE_DEFS: [(&str, &str, &str, &str); 4] = [
    ("Total Stores", "store", "/stores", "blue"),
    ("Total Products", "shopping-bag", "/products", "purple"),
    ("Active Orders", "shopping-cart", "/orders", "orange"),
    ("Total Users", "users", "/users", "emerald"),
];

fn tiles(counts: Option<&CountSummary>) -> Vec<StatTile> {
    let values = counts.map(|c| [c.stores, c.products, c.orders, c.users]);
    TILE_DEFS
        .iter()
        .enumerate()
        .map(|(i, &(title, icon, href, accent))| StatTile {
            title,
            value: values.map(|v| v[i]),
            icon,
            href,
            accent,
        })
        .collect()
}

impl DashboardView {
    /// Render the overview from an aggregation state.
    ///
    /// While `state.loading` is set this produces the skeleton: tiles
    /// without values, an empty feed, and no empty-state message.
    pub fn render(state: &DashboardState) -> Self {
        let heading = Heading {
            title: "Dashboard Overview",
            subtitle: "Welcome back to Nexus Admin.",
        };
        let callout = Callout {
            title: "Manage Stores",
            body: "Add or update store locations to expand your business reach.",
            href: "/stores",
            link_label: "Go to Stores",
        };

        if state.loading {
            return Self {
                loading: true,
                heading,
                tiles: tiles(None),
                activity: ActivityFeed {
                    entries: Vec::new(),
                    empty_message: None,
                },
                callout,
                degraded_sources: Vec::new(),
            };
        }

        let entries: Vec<ActivityEntry> = state
            .recent_orders
            .iter()
            .map(ActivityEntry::from_order)
            .collect();
        let empty_message = entries.is_empty().then_some(NO_RECENT_ACTIVITY);

        Self {
            loading: false,
            heading,
            tiles: tiles(Some(&state.counts)),
            activity: ActivityFeed {
                entries,
                empty_message,
            },
            callout,
            degraded_sources: state.failures.clone(),
        }
    }
}
