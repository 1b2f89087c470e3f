//! Page bodies, written in markdown and rendered by `tui::markdown`.

use std::borrow::Cow;

use crate::content::{changelog, menu};
use crate::content::samples::{CodeSamples, SMS_SEND};
use crate::core::navigation::Tab;

#[derive(Debug)]
pub struct Page {
    pub title: Cow<'static, str>,
    pub body: Cow<'static, str>,
    pub samples: Option<&'static CodeSamples>,
}

impl Page {
    fn fixed(title: &'static str, body: &'static str) -> Self {
        Self {
            title: Cow::Borrowed(title),
            body: Cow::Borrowed(body),
            samples: None,
        }
    }
}

/// The page shown for a tab; the section only matters on the Documentation tab.
pub fn page_for(tab: Tab, section: &str) -> Page {
    match tab {
        Tab::Documentation => documentation_page(section),
        Tab::ApiReference => Page::fixed("API Reference", API_REFERENCE),
        Tab::Changelog => Page {
            title: Cow::Borrowed("Changelog"),
            body: Cow::Owned(changelog::render_markdown(&changelog::releases())),
            samples: None,
        },
    }
}

fn documentation_page(section: &str) -> Page {
    match section {
        "introduction" => Page::fixed("Introduction", INTRODUCTION),
        "authentication" => Page::fixed("Authentication", AUTHENTICATION),
        "ussd-sessions" => Page::fixed("USSD Sessions", USSD_SESSIONS),
        "send-sms" => Page {
            samples: Some(&SMS_SEND),
            ..Page::fixed("Send SMS", SEND_SMS)
        },
        other => {
            let title = menu::find_section(other)
                .map(|(_, item)| item.title)
                .unwrap_or("Documentation");
            Page {
                title: Cow::Borrowed(title),
                body: Cow::Owned(format!(
                    "# {title}\n\nSelect a topic from the sidebar to get started with AfricasTalking APIs.\n"
                )),
                samples: None,
            }
        }
    }
}

const INTRODUCTION: &str = "\
# Welcome to AfricasTalking

Build powerful communication solutions with our SMS, USSD, and Voice APIs across Africa.

## What is AfricasTalking?

AfricasTalking is the developer platform for building voice AI agents and communication solutions.
We handle the complex infrastructure so you can focus on creating great communication experiences.

- Send and receive SMS messages across Africa
- Build interactive USSD applications
- Make and receive voice calls with AI integration

## How Communication APIs Work

Every AfricasTalking solution combines three core technologies:

### SMS Gateway

Send bulk SMS, receive messages, and handle delivery reports with our reliable SMS infrastructure.

### USSD Platform

Create interactive menu-driven applications accessible from any mobile phone without internet.

### Voice API

Make automated calls, build IVR systems, and integrate AI-powered voice conversations.
";

const SEND_SMS: &str = "\
# Send SMS

Learn how to send SMS messages using the AfricasTalking SMS API.

## Basic SMS Sending

Send SMS messages to one or multiple recipients using our REST API.

> **Pro Tip:** Always include the country code in your phone numbers for reliable delivery across different networks.
";

const AUTHENTICATION: &str = "\
# Authentication

Every request is authenticated with your application username and API key.

## API Keys

Generate an API key from your account dashboard. Keys are shown once; store them securely.

## Request Headers

Send the key in the `apiKey` header on every request:

```
apiKey: YOUR_API_KEY
Accept: application/json
```
";

const USSD_SESSIONS: &str = "\
# USSD Sessions

Create interactive USSD applications that work on any mobile phone.

## Session Flow

1. The subscriber dials your service code.
2. We call your callback URL with the session id and the text entered so far.
3. Your response starts with `CON` to continue the session or `END` to close it.

## Timeouts

Sessions are closed by the network when the subscriber stops responding. Keep menus short.
";

const API_REFERENCE: &str = "\
# API Reference

Complete API reference for all AfricasTalking endpoints.

## Base URL

`https://api.africastalking.com/version1/messaging`

## Send SMS

Send SMS messages to one or multiple recipients.

### Headers

- `apiKey: string` (Required)
- `Content-Type: application/x-www-form-urlencoded`

### Parameters

- `username` (Required): your application username
- `to` (Required): comma separated recipients in international format
- `message` (Required): the message body
";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_send_sms_has_samples() {
        let page = page_for(Tab::Documentation, "send-sms");
        assert_eq!(page.title, "Send SMS");
        assert!(page.samples.is_some());
    }

    #[test]
    fn test_unwritten_section_uses_menu_title() {
        let page = page_for(Tab::Documentation, "premium-sms");
        assert_eq!(page.title, "Premium SMS");
        assert!(page.body.starts_with("# Premium SMS"));
    }

    #[test]
    fn test_unknown_section_falls_back() {
        let page = page_for(Tab::Documentation, "made-up");
        assert_eq!(page.title, "Documentation");
    }

    #[test]
    fn test_section_ignored_outside_documentation() {
        let a = page_for(Tab::ApiReference, "send-sms");
        let b = page_for(Tab::ApiReference, "introduction");
        assert_eq!(a.body, b.body);
        assert!(a.samples.is_none());
    }

    #[test]
    fn test_changelog_page_lists_releases() {
        let page = page_for(Tab::Changelog, "introduction");
        assert!(page.body.contains("USSD Session Management Improvements"));
    }
}
