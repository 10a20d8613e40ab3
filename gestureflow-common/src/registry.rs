//! In-memory gesture and function registries.
//!
//! Both registries keep insertion order and treat unknown ids as no-ops,
//! mirroring a permissive UI: toggling or rebinding something that does not
//! exist changes nothing and raises nothing.

use crate::catalog::Catalog;
use crate::error::{Error, Result};
use crate::gesture::{Function, Gesture};

/// Label shown for a function with no gesture assigned.
pub const UNASSIGNED_LABEL: &str = "None";

/// Label shown for an assignment that does not resolve to a known gesture.
pub const UNKNOWN_GESTURE_LABEL: &str = "Unknown";

/// Ordered set of gesture definitions.
#[derive(Debug, Clone, Default)]
pub struct GestureRegistry {
    gestures: Vec<Gesture>,
}

impl GestureRegistry {
    /// Create a registry from explicit gestures.
    pub fn new(gestures: Vec<Gesture>) -> Self {
        Self { gestures }
    }

    /// Create a registry seeded from a catalog.
    pub fn from_catalog(catalog: &Catalog) -> Self {
        Self::new(catalog.gestures.clone())
    }

    /// List gestures in insertion order.
    ///
    /// Inactive gestures are skipped unless `include_inactive` is set.
    pub fn list(&self, include_inactive: bool) -> Vec<&Gesture> {
        self.gestures
            .iter()
            .filter(|g| include_inactive || g.is_active)
            .collect()
    }

    /// Flip the active flag of a gesture.
    ///
    /// Returns the updated gesture, or `None` if the id is unknown.
    pub fn toggle(&mut self, id: &str) -> Option<&Gesture> {
        let Some(gesture) = self.gestures.iter_mut().find(|g| g.id == id) else {
            tracing::debug!(gesture = %id, "Ignoring toggle of unknown gesture");
            return None;
        };

        gesture.is_active = !gesture.is_active;
        tracing::debug!(gesture = %id, active = gesture.is_active, "Toggled gesture");
        Some(gesture)
    }

    /// Look up a gesture by id.
    pub fn get(&self, id: &str) -> Option<&Gesture> {
        self.gestures.iter().find(|g| g.id == id)
    }

    /// Whether a gesture with this id exists.
    pub fn contains(&self, id: &str) -> bool {
        self.get(id).is_some()
    }

    /// Number of active gestures.
    pub fn active_count(&self) -> usize {
        self.gestures.iter().filter(|g| g.is_active).count()
    }

    /// Total number of gestures.
    pub fn len(&self) -> usize {
        self.gestures.len()
    }

    pub fn is_empty(&self) -> bool {
        self.gestures.is_empty()
    }
}

/// Ordered set of function definitions and their gesture assignments.
#[derive(Debug, Clone, Default)]
pub struct FunctionRegistry {
    functions: Vec<Function>,
}

impl FunctionRegistry {
    /// Create a registry from explicit functions.
    pub fn new(functions: Vec<Function>) -> Self {
        Self { functions }
    }

    /// Create a registry seeded from a catalog.
    pub fn from_catalog(catalog: &Catalog) -> Self {
        Self::new(catalog.functions.clone())
    }

    /// All functions in insertion order.
    pub fn list(&self) -> &[Function] {
        &self.functions
    }

    /// Look up a function by id.
    pub fn get(&self, id: &str) -> Option<&Function> {
        self.functions.iter().find(|f| f.id == id)
    }

    /// Replace the gesture assigned to a function (`None` clears it).
    ///
    /// The gesture id is not checked against any registry. Returns the
    /// updated function, or `None` if the function id is unknown.
    pub fn rebind(&mut self, function_id: &str, gesture_id: Option<&str>) -> Option<&Function> {
        let Some(function) = self.functions.iter_mut().find(|f| f.id == function_id) else {
            tracing::debug!(function = %function_id, "Ignoring rebind of unknown function");
            return None;
        };

        function.assigned_gesture = gesture_id.map(str::to_string);
        tracing::debug!(
            function = %function_id,
            gesture = ?function.assigned_gesture,
            "Rebound function"
        );
        Some(function)
    }

    /// Like [`rebind`](Self::rebind), but rejects unknown ids.
    ///
    /// Fails with `NotFound` for an unknown function and with
    /// `InvalidReference` when the gesture is not in `gestures`. Clearing
    /// an assignment is always accepted.
    pub fn rebind_checked(
        &mut self,
        function_id: &str,
        gesture_id: Option<&str>,
        gestures: &GestureRegistry,
    ) -> Result<&Function> {
        if self.get(function_id).is_none() {
            return Err(Error::function_not_found(function_id));
        }

        if let Some(gesture_id) = gesture_id.filter(|id| !gestures.contains(id)) {
            return Err(Error::InvalidReference {
                function_id: function_id.to_string(),
                gesture_id: gesture_id.to_string(),
            });
        }

        self.rebind(function_id, gesture_id)
            .ok_or_else(|| Error::function_not_found(function_id))
    }

    /// Number of functions with a gesture assigned.
    pub fn mapped_count(&self) -> usize {
        self.functions.iter().filter(|f| f.is_mapped()).count()
    }

    /// Functions currently bound to a gesture.
    pub fn bound_to(&self, gesture_id: &str) -> Vec<&Function> {
        self.functions
            .iter()
            .filter(|f| f.assigned_gesture.as_deref() == Some(gesture_id))
            .collect()
    }

    /// Total number of functions.
    pub fn len(&self) -> usize {
        self.functions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.functions.is_empty()
    }

    /// Display name for an assignment.
    ///
    /// `"None"` when nothing is assigned, `"Unknown"` when the id does not
    /// resolve in `gestures`.
    pub fn resolve_gesture_name<'a>(
        gestures: &'a GestureRegistry,
        gesture_id: Option<&str>,
    ) -> &'a str {
        match gesture_id {
            None => UNASSIGNED_LABEL,
            Some(id) => gestures
                .get(id)
                .map(|g| g.name.as_str())
                .unwrap_or(UNKNOWN_GESTURE_LABEL),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::EntityKind;

    fn two_gestures() -> GestureRegistry {
        GestureRegistry::new(vec![
            Gesture::new("swipe_left", "Swipe Left"),
            Gesture::new("pinch", "Pinch"),
        ])
    }

    fn ids<'a>(gestures: &[&'a Gesture]) -> Vec<&'a str> {
        gestures.iter().map(|g| g.id.as_str()).collect()
    }

    #[test]
    fn test_toggle_hides_from_active_list() {
        let mut registry = two_gestures();
        let toggled = registry.toggle("swipe_left").unwrap();
        assert!(!toggled.is_active);

        assert_eq!(ids(&registry.list(false)), vec!["pinch"]);
        assert_eq!(ids(&registry.list(true)), vec!["swipe_left", "pinch"]);
    }

    #[test]
    fn test_double_toggle_restores_state() {
        let mut registry = GestureRegistry::from_catalog(Catalog::builtin());
        let before: Vec<bool> = registry.list(true).iter().map(|g| g.is_active).collect();

        for id in ["swipe_up", "zoom", "wave"] {
            registry.toggle(id);
            registry.toggle(id);
        }

        let after: Vec<bool> = registry.list(true).iter().map(|g| g.is_active).collect();
        assert_eq!(before, after);
    }

    #[test]
    fn test_toggle_unknown_is_noop() {
        let mut registry = two_gestures();
        assert!(registry.toggle("moonwalk").is_none());
        assert_eq!(registry.active_count(), 2);
        assert_eq!(registry.len(), 2);
    }

    #[test]
    fn test_rebind_and_unbind() {
        let mut registry = FunctionRegistry::from_catalog(Catalog::builtin());
        assert_eq!(registry.mapped_count(), 7);

        let updated = registry.rebind("volume_up", Some("wave")).unwrap();
        assert_eq!(updated.assigned_gesture.as_deref(), Some("wave"));

        let cleared = registry.rebind("volume_up", None).unwrap();
        assert!(cleared.assigned_gesture.is_none());
        assert_eq!(registry.mapped_count(), 6);
    }

    #[test]
    fn test_rebind_accepts_unknown_gesture() {
        let mut registry = FunctionRegistry::from_catalog(Catalog::builtin());
        let updated = registry.rebind("zoom_in", Some("moonwalk")).unwrap();
        assert_eq!(updated.assigned_gesture.as_deref(), Some("moonwalk"));
    }

    #[test]
    fn test_rebind_unknown_function_is_noop() {
        let mut registry = FunctionRegistry::from_catalog(Catalog::builtin());
        assert!(registry.rebind("launch_rocket", Some("pinch")).is_none());
        assert_eq!(registry.mapped_count(), 7);
    }

    #[test]
    fn test_rebind_checked() {
        let gestures = GestureRegistry::from_catalog(Catalog::builtin());
        let mut functions = FunctionRegistry::from_catalog(Catalog::builtin());

        let err = functions
            .rebind_checked("zoom_in", Some("moonwalk"), &gestures)
            .unwrap_err();
        assert!(matches!(err, Error::InvalidReference { .. }));
        assert_eq!(
            functions.get("zoom_in").unwrap().assigned_gesture.as_deref(),
            Some("zoom")
        );

        let err = functions
            .rebind_checked("launch_rocket", None, &gestures)
            .unwrap_err();
        assert!(matches!(
            err,
            Error::NotFound {
                kind: EntityKind::Function,
                ..
            }
        ));

        let updated = functions
            .rebind_checked("zoom_in", Some("wave"), &gestures)
            .unwrap();
        assert_eq!(updated.assigned_gesture.as_deref(), Some("wave"));

        let cleared = functions.rebind_checked("zoom_in", None, &gestures).unwrap();
        assert!(!cleared.is_mapped());
    }

    #[test]
    fn test_resolve_gesture_name() {
        let gestures = two_gestures();
        assert_eq!(
            FunctionRegistry::resolve_gesture_name(&gestures, Some("pinch")),
            "Pinch"
        );
        assert_eq!(
            FunctionRegistry::resolve_gesture_name(&gestures, Some("fist")),
            "Unknown"
        );
        assert_eq!(FunctionRegistry::resolve_gesture_name(&gestures, None), "None");
    }

    #[test]
    fn test_bound_to() {
        let mut functions = FunctionRegistry::from_catalog(Catalog::builtin());
        functions.rebind("volume_up", Some("pinch"));

        let bound: Vec<_> = functions
            .bound_to("pinch")
            .iter()
            .map(|f| f.id.as_str())
            .collect();
        assert_eq!(bound, vec!["volume_up", "zoom_out"]);
        assert!(functions.bound_to("wave").is_empty());
    }
}
