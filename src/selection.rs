// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Tool activation state and selection rules.
//!
//! The [`SelectionController`] owns the tool registry and the set of
//! active tool identifiers. Every change goes through `activate` or
//! `deactivate`, which consult a [`ToolbarDelegate`] before committing and
//! notify it afterwards. None of this depends on a running UI.
//!
//! Delegate callbacks run while the controller is mutably borrowed, so a
//! delegate cannot call back into the controller that invoked it.

use crate::models::{
    config::SelectionMode,
    registry::ToolRegistry,
    tool::{Tool, ToolStatus},
};
use crate::ui::button::ToolButton;
use anyhow::Result;
use std::collections::HashSet;

/// Callbacks a toolbar host can implement to observe and veto changes.
///
/// Every method has a default, so implementors only override what they
/// need.
pub trait ToolbarDelegate {
    /// Asked before a tool changes status. Returning `false` blocks it.
    fn should_change_status(&mut self, _tool: &Tool, _proposed: ToolStatus) -> bool {
        true
    }

    /// Called after a tool's status has changed.
    fn did_change_status(&mut self, _tool: &Tool, _status: ToolStatus) {}

    /// Called after the button for a tool has been built, to allow
    /// customizing it.
    fn did_complete_setup(&mut self, _tool: &Tool, _button: &mut ToolButton) {}
}

/// Delegate that allows everything and ignores notifications.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopDelegate;

impl ToolbarDelegate for NoopDelegate {}

/// Enforces the selection mode over the set of active tools.
pub struct SelectionController {
    registry: ToolRegistry,
    active: HashSet<String>,
    mode: SelectionMode,
    delegate: Box<dyn ToolbarDelegate>,
    /// Bumped on every committed change so renderers know to resync
    revision: u64,
}

impl Default for SelectionController {
    fn default() -> Self {
        Self::new(ToolRegistry::default(), SelectionMode::default())
    }
}

impl std::fmt::Debug for SelectionController {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SelectionController")
            .field("registry", &self.registry)
            .field("active", &self.active)
            .field("mode", &self.mode)
            .field("revision", &self.revision)
            .finish_non_exhaustive()
    }
}

impl SelectionController {
    /// Create a controller with no active tools and a no-op delegate.
    pub fn new(registry: ToolRegistry, mode: SelectionMode) -> Self {
        Self {
            registry,
            active: HashSet::new(),
            mode,
            delegate: Box::new(NoopDelegate),
            revision: 0,
        }
    }

    /// Create a controller with the given delegate.
    pub fn with_delegate(
        registry: ToolRegistry,
        mode: SelectionMode,
        delegate: Box<dyn ToolbarDelegate>,
    ) -> Self {
        Self {
            delegate,
            ..Self::new(registry, mode)
        }
    }

    /// Replace the delegate.
    pub fn set_delegate(&mut self, delegate: Box<dyn ToolbarDelegate>) {
        self.delegate = delegate;
    }

    /// Replace every tool. Clears the active set on success.
    pub fn set_tools(&mut self, tools: Vec<Tool>) -> Result<()> {
        self.registry.replace(tools)?;
        self.reset();
        Ok(())
    }

    /// Change the selection mode. Clears the active set.
    pub fn set_selection_mode(&mut self, mode: SelectionMode) {
        self.mode = mode;
        self.reset();
    }

    pub fn selection_mode(&self) -> SelectionMode {
        self.mode
    }

    pub fn registry(&self) -> &ToolRegistry {
        &self.registry
    }

    pub fn revision(&self) -> u64 {
        self.revision
    }

    pub fn is_active(&self, id: &str) -> bool {
        self.active.contains(id)
    }

    /// Status of a tool, or `None` if it is not in the registry.
    pub fn status_of(&self, id: &str) -> Option<ToolStatus> {
        self.registry.find(id).map(|_| {
            if self.is_active(id) {
                ToolStatus::Active
            } else {
                ToolStatus::Inactive
            }
        })
    }

    /// Identifiers of the active tools, in no particular order.
    pub fn active_ids(&self) -> &HashSet<String> {
        &self.active
    }

    /// Active tools in registry order.
    pub fn active_tools(&self) -> Vec<&Tool> {
        self.registry.filter_by_ids(&self.active).collect()
    }

    /// Activate a tool, obeying the selection mode.
    ///
    /// Returns `false` if the tool is unknown, the delegate vetoes, or the
    /// selection mode forbids it. Activating an already active tool still
    /// asks the delegate, then succeeds without notifying.
    pub fn activate(&mut self, id: &str) -> bool {
        let Some(tool) = self.registry.find(id) else {
            log::debug!("Cannot activate unknown tool {}", id);
            return false;
        };

        if !self.delegate.should_change_status(tool, ToolStatus::Active) {
            log::debug!("Activation of {} vetoed", id);
            return false;
        }
        if self.active.contains(id) {
            return true;
        }

        match self.mode {
            SelectionMode::Single => self.active.clear(),
            SelectionMode::SingleLock => {
                if !self.active.is_empty() {
                    log::debug!("Cannot activate {} while another tool is locked", id);
                    return false;
                }
            }
            SelectionMode::Multiple => {}
        }

        self.active.insert(tool.id.clone());
        self.revision += 1;
        self.delegate.did_change_status(tool, ToolStatus::Active);
        log::debug!("Activated {}", id);
        true
    }

    /// Deactivate a tool.
    ///
    /// Returns `false` if the tool is unknown or the delegate vetoes.
    /// Deactivating an inactive tool succeeds without notifying.
    pub fn deactivate(&mut self, id: &str) -> bool {
        let Some(tool) = self.registry.find(id) else {
            log::debug!("Cannot deactivate unknown tool {}", id);
            return false;
        };

        if !self.delegate.should_change_status(tool, ToolStatus::Inactive) {
            log::debug!("Deactivation of {} vetoed", id);
            return false;
        }
        if !self.active.remove(id) {
            return true;
        }

        self.revision += 1;
        self.delegate.did_change_status(tool, ToolStatus::Inactive);
        log::debug!("Deactivated {}", id);
        true
    }

    /// Handle a press on a tool's button: toggle its status.
    pub fn toggle_press(&mut self, id: &str) -> bool {
        if self.is_active(id) {
            self.deactivate(id)
        } else {
            self.activate(id)
        }
    }

    /// Handle a press on the button at a display position.
    pub fn press_at(&mut self, index: usize) -> bool {
        match self.registry.get(index) {
            Some(tool) => {
                let id = tool.id.clone();
                self.toggle_press(&id)
            }
            None => false,
        }
    }

    /// Let the delegate customize a freshly built button.
    pub fn notify_setup(&mut self, button: &mut ToolButton) {
        if let Some(tool) = self.registry.find(&button.tool_id) {
            self.delegate.did_complete_setup(tool, button);
        }
    }

    fn reset(&mut self) {
        self.active.clear();
        // Registry or mode changed, so visuals must resync
        self.revision += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[derive(Debug, Clone, PartialEq)]
    enum Event {
        Asked(String, ToolStatus),
        Changed(String, ToolStatus),
    }

    /// Records every callback and vetoes tools listed in `blocked`.
    #[derive(Default)]
    struct Recorder {
        events: Rc<RefCell<Vec<Event>>>,
        blocked: Rc<RefCell<HashSet<String>>>,
    }

    impl ToolbarDelegate for Recorder {
        fn should_change_status(&mut self, tool: &Tool, proposed: ToolStatus) -> bool {
            self.events.borrow_mut().push(Event::Asked(tool.id.clone(), proposed));
            !self.blocked.borrow().contains(&tool.id)
        }

        fn did_change_status(&mut self, tool: &Tool, status: ToolStatus) {
            self.events.borrow_mut().push(Event::Changed(tool.id.clone(), status));
        }
    }

    fn sample_registry() -> ToolRegistry {
        let tools = ["doc", "folder", "highlighter", "trash"]
            .into_iter()
            .map(|id| Tool::glyph(id, id))
            .collect();
        ToolRegistry::new(tools).unwrap()
    }

    fn controller(mode: SelectionMode) -> SelectionController {
        SelectionController::new(sample_registry(), mode)
    }

    fn recorded(
        mode: SelectionMode,
    ) -> (SelectionController, Rc<RefCell<Vec<Event>>>, Rc<RefCell<HashSet<String>>>) {
        let recorder = Recorder::default();
        let events = recorder.events.clone();
        let blocked = recorder.blocked.clone();
        let controller = SelectionController::with_delegate(sample_registry(), mode, Box::new(recorder));
        (controller, events, blocked)
    }

    fn changes(events: &Rc<RefCell<Vec<Event>>>) -> Vec<Event> {
        events
            .borrow()
            .iter()
            .filter(|e| matches!(e, Event::Changed(..)))
            .cloned()
            .collect()
    }

    fn active_ids(controller: &SelectionController) -> Vec<&str> {
        controller.active_tools().iter().map(|t| t.id.as_str()).collect()
    }

    #[test]
    fn test_starts_with_nothing_active() {
        let controller = controller(SelectionMode::Single);
        assert_eq!(controller.registry().len(), 4);
        assert!(controller.active_tools().is_empty());
    }

    #[test]
    fn test_activation() {
        let mut controller = controller(SelectionMode::Single);
        assert!(controller.activate("doc"));
        assert!(!controller.activate("fakeTool"));
        assert_eq!(active_ids(&controller), vec!["doc"]);
    }

    #[test]
    fn test_deactivation() {
        let mut controller = controller(SelectionMode::Single);
        controller.activate("doc");
        assert!(controller.deactivate("doc"));
        assert!(controller.active_tools().is_empty());
    }

    #[test]
    fn test_single_selection_evicts() {
        let mut controller = controller(SelectionMode::Single);
        assert!(controller.activate("doc"));
        assert_eq!(active_ids(&controller), vec!["doc"]);

        assert!(controller.activate("folder"));
        assert_eq!(active_ids(&controller), vec!["folder"]);

        assert!(controller.activate("trash"));
        assert_eq!(active_ids(&controller), vec!["trash"]);
    }

    #[test]
    fn test_single_selection_never_exceeds_one() {
        let mut controller = controller(SelectionMode::Single);
        for id in ["doc", "folder", "doc", "highlighter", "trash", "trash"] {
            controller.activate(id);
            assert!(controller.active_ids().len() <= 1);
        }
    }

    #[test]
    fn test_single_eviction_notifies_only_new_tool() {
        let (mut controller, events, _) = recorded(SelectionMode::Single);
        controller.activate("doc");
        controller.activate("folder");

        assert_eq!(
            changes(&events),
            vec![
                Event::Changed("doc".into(), ToolStatus::Active),
                Event::Changed("folder".into(), ToolStatus::Active),
            ]
        );
    }

    #[test]
    fn test_single_lock_selection() {
        let mut controller = controller(SelectionMode::SingleLock);
        assert!(controller.activate("doc"));
        assert_eq!(active_ids(&controller), vec!["doc"]);

        assert!(!controller.activate("folder"));
        assert_eq!(active_ids(&controller), vec!["doc"]);

        // Unlocks once the active tool is released
        assert!(controller.deactivate("doc"));
        assert!(controller.activate("folder"));
        assert_eq!(active_ids(&controller), vec!["folder"]);
    }

    #[test]
    fn test_single_lock_reactivating_locked_tool_succeeds() {
        let mut controller = controller(SelectionMode::SingleLock);
        controller.activate("doc");
        assert!(controller.activate("doc"));
    }

    #[test]
    fn test_multiple_selection() {
        let mut controller = controller(SelectionMode::Multiple);
        for id in ["doc", "folder", "highlighter", "trash"] {
            assert!(controller.activate(id));
        }
        assert_eq!(controller.active_tools().len(), 4);
    }

    #[test]
    fn test_active_tools_follow_registry_order() {
        let mut controller = controller(SelectionMode::Multiple);
        controller.activate("trash");
        controller.activate("doc");
        controller.activate("highlighter");

        assert_eq!(active_ids(&controller), vec!["doc", "highlighter", "trash"]);
    }

    #[test]
    fn test_unknown_tool_never_changes_state() {
        for mode in [SelectionMode::Single, SelectionMode::SingleLock, SelectionMode::Multiple] {
            let (mut controller, events, _) = recorded(mode);
            controller.activate("doc");
            let revision = controller.revision();

            assert!(!controller.activate("fakeTool"));
            assert!(!controller.deactivate("fakeTool"));
            assert_eq!(active_ids(&controller), vec!["doc"]);
            assert_eq!(controller.revision(), revision);
            // The delegate is never asked about unknown tools
            assert!(!events
                .borrow()
                .iter()
                .any(|e| matches!(e, Event::Asked(id, _) if id == "fakeTool")));
        }
    }

    #[test]
    fn test_deactivating_inactive_tool_is_silent() {
        let (mut controller, events, _) = recorded(SelectionMode::Multiple);
        assert!(controller.deactivate("folder"));
        assert!(changes(&events).is_empty());
    }

    #[test]
    fn test_activation_is_idempotent() {
        let (mut controller, events, _) = recorded(SelectionMode::Multiple);
        assert!(controller.activate("doc"));
        let revision = controller.revision();
        assert!(controller.activate("doc"));

        assert_eq!(active_ids(&controller), vec!["doc"]);
        assert_eq!(controller.revision(), revision);
        assert_eq!(changes(&events), vec![Event::Changed("doc".into(), ToolStatus::Active)]);
    }

    #[test]
    fn test_veto_blocks_activation_and_deactivation() {
        let (mut controller, events, blocked) = recorded(SelectionMode::Multiple);
        controller.activate("doc");
        blocked.borrow_mut().insert("doc".into());
        blocked.borrow_mut().insert("folder".into());

        assert!(!controller.activate("folder"));
        assert!(!controller.deactivate("doc"));
        assert_eq!(active_ids(&controller), vec!["doc"]);
        assert_eq!(changes(&events).len(), 1);
    }

    #[test]
    fn test_veto_checked_before_already_active() {
        let (mut controller, events, blocked) = recorded(SelectionMode::Single);
        controller.activate("doc");
        blocked.borrow_mut().insert("doc".into());

        assert!(!controller.activate("doc"));
        assert_eq!(
            events.borrow().last(),
            Some(&Event::Asked("doc".into(), ToolStatus::Active))
        );
    }

    #[test]
    fn test_veto_overrides_permissive_mode() {
        let (mut controller, _, blocked) = recorded(SelectionMode::Single);
        controller.activate("doc");
        blocked.borrow_mut().insert("folder".into());

        // Single mode would evict doc, but the veto comes first
        assert!(!controller.activate("folder"));
        assert_eq!(active_ids(&controller), vec!["doc"]);
    }

    #[test]
    fn test_toggle_press() {
        let (mut controller, events, _) = recorded(SelectionMode::Single);
        assert!(controller.toggle_press("highlighter"));
        assert!(controller.is_active("highlighter"));
        assert!(controller.toggle_press("highlighter"));
        assert!(!controller.is_active("highlighter"));

        assert_eq!(
            changes(&events),
            vec![
                Event::Changed("highlighter".into(), ToolStatus::Active),
                Event::Changed("highlighter".into(), ToolStatus::Inactive),
            ]
        );
    }

    #[test]
    fn test_press_at_index() {
        let mut controller = controller(SelectionMode::Single);
        assert!(controller.press_at(1));
        assert_eq!(active_ids(&controller), vec!["folder"]);
        assert!(!controller.press_at(10));
        assert_eq!(active_ids(&controller), vec!["folder"]);
    }

    #[test]
    fn test_status_of() {
        let mut controller = controller(SelectionMode::Single);
        controller.activate("trash");
        assert_eq!(controller.status_of("trash"), Some(ToolStatus::Active));
        assert_eq!(controller.status_of("doc"), Some(ToolStatus::Inactive));
        assert_eq!(controller.status_of("fakeTool"), None);
    }

    #[test]
    fn test_set_tools_resets_active_set() {
        let mut controller = controller(SelectionMode::Multiple);
        controller.activate("doc");
        controller.activate("folder");

        controller
            .set_tools(vec![Tool::glyph("doc", "d"), Tool::glyph("pen", "p")])
            .unwrap();
        assert!(controller.active_tools().is_empty());
        assert!(controller.activate("pen"));
        assert!(!controller.activate("folder"));
    }

    #[test]
    fn test_set_tools_rejects_duplicates() {
        let mut controller = controller(SelectionMode::Multiple);
        controller.activate("doc");

        let result = controller.set_tools(vec![Tool::glyph("pen", "p"), Tool::glyph("pen", "q")]);
        assert!(result.is_err());
        // Neither the registry nor the active set changed
        assert_eq!(controller.registry().len(), 4);
        assert_eq!(active_ids(&controller), vec!["doc"]);
    }

    #[test]
    fn test_mode_change_resets_active_set() {
        let mut controller = controller(SelectionMode::Multiple);
        controller.activate("doc");
        controller.activate("trash");

        controller.set_selection_mode(SelectionMode::SingleLock);
        assert_eq!(controller.selection_mode(), SelectionMode::SingleLock);
        assert!(controller.active_tools().is_empty());
    }

    #[test]
    fn test_revision_bumps_on_commit_only() {
        let mut controller = controller(SelectionMode::SingleLock);
        let start = controller.revision();

        controller.activate("doc");
        assert_eq!(controller.revision(), start + 1);
        controller.activate("folder");
        assert_eq!(controller.revision(), start + 1);
        controller.deactivate("doc");
        assert_eq!(controller.revision(), start + 2);
    }
}
