pub mod page;

use anyhow::{Result, anyhow, ensure};
use async_trait::async_trait;
use keynav_core::{FocusNavigator, KEYBOARD_NAV_ACTIVE_CLASS, KeyPress, PageAdapter};

use crate::common::fixture::FixtureNode;
use crate::common::scenario::ScenarioDriver;
pub use page::SimulatedPage;

/// Replays scenarios against a [`FocusNavigator`] over a [`SimulatedPage`].
pub struct LogicDriver {
    navigator: FocusNavigator<SimulatedPage>,
}

impl LogicDriver {
    #[must_use]
    pub fn new() -> Self {
        Self {
            navigator: FocusNavigator::new(SimulatedPage::default()),
        }
    }

    fn page(&self) -> &SimulatedPage {
        self.navigator.page()
    }
}

impl Default for LogicDriver {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait(?Send)]
impl ScenarioDriver for LogicDriver {
    async fn load(&mut self, fixture: &[FixtureNode]) -> Result<()> {
        self.navigator = FocusNavigator::new(SimulatedPage::from_fixture(fixture));
        self.navigator.set_enabled(true);
        ensure!(
            self.page().has_root_class(KEYBOARD_NAV_ACTIVE_CLASS),
            "keyboard navigation did not mark the page root"
        );
        Ok(())
    }

    async fn focus(&mut self, id: &str) -> Result<()> {
        let page = self.page();
        let element = page
            .find(id)
            .ok_or_else(|| anyhow!("no element with id {id}"))?;
        page.focus(&element);
        Ok(())
    }

    async fn clear_focus(&mut self) -> Result<()> {
        self.page().blur();
        Ok(())
    }

    async fn press(&mut self, press: KeyPress) -> Result<bool> {
        let target = self.page().focused();
        let outcome = self.navigator.handle_key(press, target.as_ref());
        log::debug!("{press} -> {:?}", outcome.action);
        Ok(outcome.prevent_default)
    }

    async fn focused_id(&mut self) -> Result<Option<String>> {
        let page = self.page();
        Ok(page
            .focused()
            .and_then(|element| page.id_of(element))
            .map(ToString::to_string))
    }

    async fn clicked_ids(&mut self) -> Result<Vec<String>> {
        Ok(self.page().clicked_ids())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::scenario::{catalog, run_scenario};

    fn block_on<F: std::future::Future>(future: F) -> F::Output {
        tokio::runtime::Builder::new_current_thread()
            .build()
            .expect("runtime")
            .block_on(future)
    }

    #[test]
    fn every_catalog_scenario_passes_against_the_navigator() {
        for scenario in catalog() {
            let mut driver = LogicDriver::new();
            let outcome = block_on(run_scenario(&mut driver, &scenario, false));
            assert!(outcome.is_ok(), "{}: {:#}", scenario.name, outcome.unwrap_err());
        }
    }

    #[test]
    fn focusing_an_unknown_id_fails() {
        let mut driver = LogicDriver::new();
        block_on(driver.load(&[FixtureNode::button("a")])).expect("load");
        assert!(block_on(driver.focus("zzz")).is_err());
    }

    #[test]
    fn reloading_replaces_the_page() {
        let mut driver = LogicDriver::new();
        block_on(driver.load(&[FixtureNode::button("a")])).expect("load");
        block_on(driver.focus("a")).expect("focus");
        block_on(driver.load(&[FixtureNode::button("b")])).expect("reload");
        assert_eq!(block_on(driver.focused_id()).expect("focused"), None);
        assert!(block_on(driver.focus("a")).is_err());
    }
}
