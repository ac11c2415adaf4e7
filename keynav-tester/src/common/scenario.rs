use std::fmt;

use anyhow::{Context, Result};
use async_trait::async_trait;
use keynav_core::KeyPress;
use thiserror::Error;

use super::fixture::FixtureNode;

/// Something that can host a fixture page and replay scenario steps.
#[async_trait(?Send)]
pub trait ScenarioDriver {
    /// Replace the current page with `fixture` and enable keyboard navigation.
    async fn load(&mut self, fixture: &[FixtureNode]) -> Result<()>;

    async fn focus(&mut self, id: &str) -> Result<()>;

    async fn clear_focus(&mut self) -> Result<()>;

    /// Deliver a key press to the focused element; returns whether the
    /// default action was prevented.
    async fn press(&mut self, press: KeyPress) -> Result<bool>;

    async fn focused_id(&mut self) -> Result<Option<String>>;

    /// Ids of clicked elements, repeated once per click, sorted.
    async fn clicked_ids(&mut self) -> Result<Vec<String>>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Focus(&'static str),
    ClearFocus,
    Press(&'static str),
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Focus(id) => write!(f, "focus #{id}"),
            Self::ClearFocus => f.write_str("clear focus"),
            Self::Press(chord) => write!(f, "press {chord}"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Expect {
    Focused(&'static str),
    NothingFocused,
    Prevented(bool),
    /// Every click since the page loaded, in any order.
    Clicked(Vec<&'static str>),
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ExpectationError {
    #[error("expected focus on {expected}, found {found}")]
    Focus { expected: String, found: String },
    #[error("expected default prevented = {expected}, found {found}")]
    Prevented { expected: bool, found: bool },
    #[error("prevented-default expectation without a key press")]
    NoKeyPress,
    #[error("expected clicks {expected:?}, found {found:?}")]
    Clicks {
        expected: Vec<String>,
        found: Vec<String>,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Step {
    pub action: Action,
    pub expect: Vec<Expect>,
}

impl Step {
    #[must_use]
    pub const fn focus(id: &'static str) -> Self {
        Self::new(Action::Focus(id))
    }

    #[must_use]
    pub const fn clear_focus() -> Self {
        Self::new(Action::ClearFocus)
    }

    #[must_use]
    pub const fn press(chord: &'static str) -> Self {
        Self::new(Action::Press(chord))
    }

    const fn new(action: Action) -> Self {
        Self {
            action,
            expect: Vec::new(),
        }
    }

    #[must_use]
    pub fn focused(mut self, id: &'static str) -> Self {
        self.expect.push(Expect::Focused(id));
        self
    }

    #[must_use]
    pub fn nothing_focused(mut self) -> Self {
        self.expect.push(Expect::NothingFocused);
        self
    }

    #[must_use]
    pub fn prevented(mut self, prevented: bool) -> Self {
        self.expect.push(Expect::Prevented(prevented));
        self
    }

    #[must_use]
    pub fn clicked(mut self, ids: &[&'static str]) -> Self {
        self.expect.push(Expect::Clicked(ids.to_vec()));
        self
    }
}

#[derive(Debug, Clone)]
pub struct Scenario {
    pub name: &'static str,
    pub description: &'static str,
    pub fixture: Vec<FixtureNode>,
    pub steps: Vec<Step>,
}

/// Load the scenario's page and replay its steps, failing on the first unmet
/// expectation.
///
/// # Errors
///
/// Returns an error naming the failing step when the driver fails or an
/// expectation is not met.
pub async fn run_scenario<D: ScenarioDriver + ?Sized>(
    driver: &mut D,
    scenario: &Scenario,
    verbose: bool,
) -> Result<()> {
    driver
        .load(&scenario.fixture)
        .await
        .with_context(|| format!("loading fixture for {}", scenario.name))?;

    for (index, step) in scenario.steps.iter().enumerate() {
        if verbose {
            println!("   step {}: {}", index + 1, step.action);
        }
        run_step(driver, step)
            .await
            .with_context(|| format!("step {} ({})", index + 1, step.action))?;
    }
    Ok(())
}

async fn run_step<D: ScenarioDriver + ?Sized>(driver: &mut D, step: &Step) -> Result<()> {
    let prevented = match step.action {
        Action::Focus(id) => {
            driver.focus(id).await?;
            None
        }
        Action::ClearFocus => {
            driver.clear_focus().await?;
            None
        }
        Action::Press(chord) => {
            let press: KeyPress = chord.parse()?;
            Some(driver.press(press).await?)
        }
    };

    for expect in &step.expect {
        match expect {
            Expect::Focused(id) => check_focus(driver.focused_id().await?, Some(*id))?,
            Expect::NothingFocused => check_focus(driver.focused_id().await?, None)?,
            Expect::Prevented(expected) => {
                let found = prevented.ok_or(ExpectationError::NoKeyPress)?;
                if found != *expected {
                    return Err(ExpectationError::Prevented {
                        expected: *expected,
                        found,
                    }
                    .into());
                }
            }
            Expect::Clicked(ids) => {
                let mut expected: Vec<String> = ids.iter().map(ToString::to_string).collect();
                expected.sort();
                let found = driver.clicked_ids().await?;
                if found != expected {
                    return Err(ExpectationError::Clicks { expected, found }.into());
                }
            }
        }
    }
    Ok(())
}

fn check_focus(found: Option<String>, expected: Option<&str>) -> Result<(), ExpectationError> {
    if found.as_deref() == expected {
        return Ok(());
    }
    let describe = |id: Option<&str>| id.map_or_else(|| "nothing".to_string(), |id| format!("#{id}"));
    Err(ExpectationError::Focus {
        expected: describe(expected),
        found: describe(found.as_deref()),
    })
}

/// Every scenario, in catalog order.
#[must_use]
pub fn catalog() -> Vec<Scenario> {
    vec![
        directional_wrap(),
        tab_boundary(),
        activation_scope(),
        escape_dismiss(),
        unfocused_start(),
        disabled_skipped(),
    ]
}

#[must_use]
pub fn get_scenario(name: &str) -> Option<Scenario> {
    catalog().into_iter().find(|s| s.name == name)
}

#[must_use]
pub fn list_scenarios() -> Vec<(&'static str, &'static str)> {
    catalog()
        .iter()
        .map(|s| (s.name, s.description))
        .collect()
}

fn directional_wrap() -> Scenario {
    Scenario {
        name: "directional-wrap",
        description: "Arrow keys cycle through the focus order and wrap at both ends",
        fixture: vec![
            FixtureNode::button("a"),
            FixtureNode::link("b"),
            FixtureNode::input("c"),
        ],
        steps: vec![
            Step::focus("a"),
            Step::press("ArrowRight").focused("b").prevented(true),
            Step::press("ArrowDown").focused("c").prevented(true),
            Step::press("ArrowRight").focused("a").prevented(true),
            Step::press("ArrowLeft").focused("c").prevented(true),
            Step::press("ArrowUp").focused("b").prevented(true),
        ],
    }
}

fn tab_boundary() -> Scenario {
    Scenario {
        name: "tab-boundary",
        description: "Tab moves without wrapping and leaves the edges to the browser",
        fixture: vec![
            FixtureNode::button("a"),
            FixtureNode::button("b"),
            FixtureNode::button("c"),
        ],
        steps: vec![
            Step::focus("a"),
            Step::press("Shift+Tab").focused("a").prevented(false),
            Step::press("Tab").focused("b").prevented(true),
            Step::press("Tab").focused("c").prevented(true),
            Step::press("Tab").focused("c").prevented(false),
            Step::press("Shift+Tab").focused("b").prevented(true),
        ],
    }
}

fn activation_scope() -> Scenario {
    Scenario {
        name: "activation-scope",
        description: "Enter and Space click buttons only",
        fixture: vec![
            FixtureNode::button("save").child(FixtureNode::span("save-label")),
            FixtureNode::div("custom")
                .with_role("button")
                .with_tabindex("0"),
            FixtureNode::link("docs"),
            FixtureNode::div("plain").with_tabindex("0"),
        ],
        steps: vec![
            Step::focus("save"),
            Step::press("Enter").prevented(true).clicked(&["save"]),
            Step::focus("custom"),
            Step::press("Space")
                .prevented(true)
                .clicked(&["custom", "save"]),
            Step::focus("docs"),
            Step::press("Enter")
                .prevented(false)
                .clicked(&["custom", "save"]),
            Step::focus("plain"),
            Step::press("Space")
                .prevented(false)
                .clicked(&["custom", "save"]),
        ],
    }
}

fn escape_dismiss() -> Scenario {
    Scenario {
        name: "escape-dismiss",
        description: "Escape clicks every expanded element and keeps focus",
        fixture: vec![
            FixtureNode::button("m1").expanded(true),
            FixtureNode::button("m2").expanded(false),
            FixtureNode::div("m3").expanded(true),
            FixtureNode::button("m4"),
            FixtureNode::button("m5").expanded(true),
        ],
        steps: vec![
            Step::focus("m4"),
            Step::press("Escape")
                .prevented(false)
                .focused("m4")
                .clicked(&["m1", "m3", "m5"]),
        ],
    }
}

fn unfocused_start() -> Scenario {
    Scenario {
        name: "unfocused-start",
        description: "Keys pressed with nothing focused start from the edges",
        fixture: vec![
            FixtureNode::button("a"),
            FixtureNode::button("b"),
            FixtureNode::button("c"),
        ],
        steps: vec![
            Step::clear_focus().nothing_focused(),
            Step::press("ArrowRight").focused("a").prevented(true),
            Step::clear_focus(),
            Step::press("ArrowLeft").focused("c").prevented(true),
            Step::clear_focus(),
            Step::press("Tab").focused("a").prevented(true),
            Step::clear_focus(),
            Step::press("Shift+Tab").nothing_focused().prevented(false),
            Step::press("Enter").prevented(false).clicked(&[]),
        ],
    }
}

fn disabled_skipped() -> Scenario {
    Scenario {
        name: "disabled-skipped",
        description: "Disabled controls and tabindex=-1 elements are skipped",
        fixture: vec![
            FixtureNode::button("a"),
            FixtureNode::button("off").disabled(),
            FixtureNode::div("neg").with_tabindex("-1"),
            FixtureNode::input("ro").disabled(),
            FixtureNode::link("c"),
        ],
        steps: vec![
            Step::focus("a"),
            Step::press("ArrowRight").focused("c").prevented(true),
            Step::press("ArrowRight").focused("a").prevented(true),
            Step::press("ArrowLeft").focused("c").prevented(true),
        ],
    }
}
