//! Sidebar menu tree for the Documentation tab.
//!
//! Groups are collapsible; `visible_rows` flattens the tree into the rows the
//! sidebar actually shows for a given `NavigationState`.

use crate::core::navigation::NavigationState;

#[derive(Debug)]
pub struct MenuItem {
    pub id: &'static str,
    pub title: &'static str,
    pub path: &'static str,
}

#[derive(Debug)]
pub struct MenuGroup {
    pub id: &'static str,
    pub title: &'static str,
    pub items: &'static [MenuItem],
}

pub static MENU: &[MenuGroup] = &[
    MenuGroup {
        id: "getting-started",
        title: "Getting Started",
        items: &[
            MenuItem { id: "introduction", title: "Introduction", path: "/documentation/introduction" },
            MenuItem { id: "authentication", title: "Authentication", path: "/documentation/authentication" },
            MenuItem { id: "request-headers", title: "Request Headers", path: "/documentation/request_headers" },
        ],
    },
    MenuGroup {
        id: "sms",
        title: "SMS API",
        items: &[
            MenuItem { id: "send-sms", title: "Send SMS", path: "/documentation/sms/send" },
            MenuItem { id: "receive-sms", title: "Receive SMS", path: "/documentation/sms/receive" },
            MenuItem { id: "delivery-reports", title: "Delivery Reports", path: "/documentation/sms/delivery-reports" },
            MenuItem { id: "premium-sms", title: "Premium SMS", path: "/documentation/sms/premium" },
        ],
    },
    MenuGroup {
        id: "ussd",
        title: "USSD API",
        items: &[
            MenuItem { id: "ussd-sessions", title: "USSD Sessions", path: "/documentation/ussd/sessions" },
            MenuItem { id: "ussd-callbacks", title: "Callbacks", path: "/documentation/ussd/callbacks" },
            MenuItem { id: "ussd-examples", title: "Examples", path: "/documentation/ussd/examples" },
        ],
    },
    MenuGroup {
        id: "voice",
        title: "Voice API",
        items: &[
            MenuItem { id: "make-calls", title: "Make Calls", path: "/documentation/voice/make-calls" },
            MenuItem { id: "receive-calls", title: "Receive Calls", path: "/documentation/voice/receive-calls" },
            MenuItem { id: "ivr-system", title: "IVR System", path: "/documentation/voice/ivr" },
            MenuItem { id: "call-recording", title: "Call Recording", path: "/documentation/voice/recording" },
        ],
    },
    MenuGroup {
        id: "airtime",
        title: "Airtime API",
        items: &[
            MenuItem { id: "send-airtime", title: "Send Airtime", path: "/documentation/airtime/send" },
            MenuItem { id: "airtime-status", title: "Check Status", path: "/documentation/airtime/status" },
            MenuItem { id: "supported-countries", title: "Supported Countries", path: "/documentation/airtime/countries" },
        ],
    },
];

/// One rendered sidebar row.
#[derive(Debug, Clone, Copy)]
pub enum MenuRow {
    Group {
        group: &'static MenuGroup,
        expanded: bool,
    },
    Item {
        group: &'static MenuGroup,
        item: &'static MenuItem,
    },
}

impl MenuRow {
    pub fn title(&self) -> &'static str {
        match self {
            MenuRow::Group { group, .. } => group.title,
            MenuRow::Item { item, .. } => item.title,
        }
    }
}

pub fn visible_rows(nav: &NavigationState) -> Vec<MenuRow> {
    let mut rows = Vec::new();
    for group in MENU {
        let expanded = nav.is_expanded(group.id);
        rows.push(MenuRow::Group { group, expanded });
        if expanded {
            rows.extend(group.items.iter().map(|item| MenuRow::Item { group, item }));
        }
    }
    rows
}

/// Look up a section id, returning its group and menu item.
pub fn find_section(id: &str) -> Option<(&'static MenuGroup, &'static MenuItem)> {
    MENU.iter().find_map(|group| {
        group
            .items
            .iter()
            .find(|item| item.id == id)
            .map(|item| (group, item))
    })
}

pub fn find_path(path: &str) -> Option<&'static MenuItem> {
    MENU.iter()
        .flat_map(|group| group.items.iter())
        .find(|item| item.path == path)
}
