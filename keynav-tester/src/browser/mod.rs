pub mod session;

use std::time::Duration;

use anyhow::{Context, Result, bail};
use async_trait::async_trait;
use keynav_core::{
    AccessibilitySettings, KEYBOARD_NAV_ACTIVE_CLASS, KeyPress, NavKey, SETTINGS_KEY,
};
use serde_json::{Value, json};
use thirtyfour::prelude::*;

use crate::common::fixture::{CLICK_COUNTER, FixtureNode, page_html};
use crate::common::scenario::ScenarioDriver;
pub use session::{BrowserConfig, BrowserKind, new_session};

const READY_POLL_ATTEMPTS: u32 = 50;
const READY_POLL_INTERVAL: Duration = Duration::from_millis(100);

const DISPATCH_KEYDOWN: &str = r"
const target = document.activeElement || document.body;
const event = new KeyboardEvent('keydown', {
  key: arguments[0], shiftKey: arguments[1], bubbles: true, cancelable: true,
});
target.dispatchEvent(event);
return event.defaultPrevented;
";

const FOCUSED_ID: &str = r"
const el = document.activeElement;
return el && el !== document.body && el.id ? el.id : null;
";

/// Replays scenarios in a live page served at `base_url`.
///
/// Keyboard navigation is switched on through the persisted settings record,
/// the app shell is cleared, and the fixture is written into `<body>`. Key
/// presses are synthetic `keydown` events so the browser's own Tab and Enter
/// handling does not interfere.
pub struct BrowserDriver<'a> {
    driver: &'a WebDriver,
    base_url: String,
}

impl<'a> BrowserDriver<'a> {
    pub fn new(driver: &'a WebDriver, base_url: impl Into<String>) -> Self {
        Self {
            driver,
            base_url: base_url.into(),
        }
    }

    async fn exec(&self, script: &str, args: Vec<Value>) -> Result<Value> {
        let ret = self
            .driver
            .execute(script, args)
            .await
            .context("executing page script")?;
        Ok(ret.json().clone())
    }

    async fn enable_keyboard_navigation(&self) -> Result<()> {
        let settings = AccessibilitySettings::default()
            .with_keyboard_nav(true)
            .to_json()?;
        self.exec(
            "localStorage.setItem(arguments[0], arguments[1]);",
            vec![json!(SETTINGS_KEY), json!(settings)],
        )
        .await?;
        self.driver.refresh().await.context("reloading page")?;

        for _ in 0..READY_POLL_ATTEMPTS {
            let ready = self
                .exec(
                    "return document.documentElement.classList.contains(arguments[0]);",
                    vec![json!(KEYBOARD_NAV_ACTIVE_CLASS)],
                )
                .await?;
            if ready.as_bool() == Some(true) {
                return Ok(());
            }
            tokio::time::sleep(READY_POLL_INTERVAL).await;
        }
        bail!("page never marked the root with {KEYBOARD_NAV_ACTIVE_CLASS}")
    }
}

/// `KeyboardEvent.key` value for a navigator key.
fn dom_key(key: NavKey) -> &'static str {
    match key {
        NavKey::Space => " ",
        other => other.name(),
    }
}

/// Expand `[[id, clicks], ...]` into a sorted id list with one entry per click.
fn expand_clicks(value: &Value) -> Result<Vec<String>> {
    let pairs: Vec<(String, u32)> =
        serde_json::from_value(value.clone()).context("decoding click counters")?;
    let mut ids: Vec<String> = pairs
        .into_iter()
        .flat_map(|(id, clicks)| std::iter::repeat_n(id, clicks as usize))
        .collect();
    ids.sort();
    Ok(ids)
}

#[async_trait(?Send)]
impl ScenarioDriver for BrowserDriver<'_> {
    async fn load(&mut self, fixture: &[FixtureNode]) -> Result<()> {
        self.driver
            .goto(&self.base_url)
            .await
            .with_context(|| format!("opening {}", self.base_url))?;
        self.enable_keyboard_navigation().await?;
        self.exec(
            "document.body.innerHTML = arguments[0];",
            vec![json!(page_html(fixture))],
        )
        .await?;
        Ok(())
    }

    async fn focus(&mut self, id: &str) -> Result<()> {
        let found = self
            .exec(
                "const el = document.getElementById(arguments[0]);\
                 if (!el) { return false; } el.focus(); return true;",
                vec![json!(id)],
            )
            .await?;
        if found.as_bool() != Some(true) {
            bail!("no element with id {id}");
        }
        Ok(())
    }

    async fn clear_focus(&mut self) -> Result<()> {
        self.exec(
            "if (document.activeElement) { document.activeElement.blur(); }",
            Vec::new(),
        )
        .await?;
        Ok(())
    }

    async fn press(&mut self, press: KeyPress) -> Result<bool> {
        let prevented = self
            .exec(
                DISPATCH_KEYDOWN,
                vec![json!(dom_key(press.key)), json!(press.shift)],
            )
            .await?;
        Ok(prevented.as_bool().unwrap_or(false))
    }

    async fn focused_id(&mut self) -> Result<Option<String>> {
        let value = self.exec(FOCUSED_ID, Vec::new()).await?;
        Ok(value.as_str().map(ToString::to_string))
    }

    async fn clicked_ids(&mut self) -> Result<Vec<String>> {
        let script = format!(
            "return Array.from(document.querySelectorAll('[{CLICK_COUNTER}]'))\
             .map(el => [el.id, +el.getAttribute('{CLICK_COUNTER}')]);"
        );
        let value = self.exec(&script, Vec::new()).await?;
        expand_clicks(&value)
    }
}
