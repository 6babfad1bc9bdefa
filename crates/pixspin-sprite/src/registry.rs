//! Rotation state registry
//!
//! [`RotationRegistry`] maps sprite ids to their [`RotationState`]. State is
//! created lazily the first time a sprite's rotation is set and lives until
//! [`RotationRegistry::release`] is called for it, normally when the host
//! destroys the sprite.

use crate::{RotationConfig, RotationState, SpriteError, SpriteHost, SpriteId, SpriteResult};
use pixspin_transform::TransformError;
use std::collections::HashMap;
use std::collections::hash_map::Entry;
use tracing::debug;

/// Rotation state for every sprite that has been rotated
#[derive(Debug, Default)]
pub struct RotationRegistry {
    states: HashMap<SpriteId, RotationState>,
    config: RotationConfig,
}

impl RotationRegistry {
    /// Create an empty registry with the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty registry building sample sources per `config`.
    pub fn with_config(config: RotationConfig) -> Self {
        Self {
            states: HashMap::new(),
            config,
        }
    }

    /// The configuration used for new states.
    pub fn config(&self) -> &RotationConfig {
        &self.config
    }

    /// Current angle of a sprite in degrees.
    ///
    /// Sprites that were never rotated (or were released) are at 0.
    pub fn get_rotation(&self, id: SpriteId) -> f64 {
        self.states.get(&id).map_or(0.0, RotationState::rotation)
    }

    /// Rotate a sprite to an absolute angle and display the result.
    ///
    /// On the first call for `id` the sprite's current image is taken from
    /// `host` as the unrotated original. The raw angle is stored as given;
    /// [`get_rotation`](Self::get_rotation) returns it unchanged. The rotated
    /// image is recomputed on every call and installed with
    /// [`SpriteHost::install_image`].
    ///
    /// # Errors
    ///
    /// - [`SpriteError::UnknownSprite`] if the host does not know `id`.
    ///   No state is created in that case.
    /// - [`TransformError::InvalidAngle`] if `degrees` is not finite.
    ///
    /// On error the stored angle is left unchanged.
    pub fn set_rotation<H>(&mut self, host: &mut H, id: SpriteId, degrees: f64) -> SpriteResult<()>
    where
        H: SpriteHost + ?Sized,
    {
        if !degrees.is_finite() {
            return Err(TransformError::InvalidAngle(degrees).into());
        }

        let state = match self.states.entry(id) {
            Entry::Occupied(entry) => entry.into_mut(),
            Entry::Vacant(entry) => {
                let image = host
                    .sprite_image(id)
                    .ok_or(SpriteError::UnknownSprite(id))?;
                let state = RotationState::new(id, image, &self.config)?;
                debug!(
                    "RotationRegistry::set_rotation: tracking {} ({}x{}, {:?})",
                    id,
                    state.original().width(),
                    state.original().height(),
                    self.config.upscaler
                );
                entry.insert(state)
            }
        };

        // The angle only changes once the frame is on screen
        let rotated = state.render_at(degrees)?;
        if !host.install_image(id, rotated) {
            return Err(SpriteError::UnknownSprite(id));
        }
        state.set_rotation(degrees)
    }

    /// Rotate a sprite by `delta` degrees relative to its current angle.
    pub fn change_rotation<H>(&mut self, host: &mut H, id: SpriteId, delta: f64) -> SpriteResult<()>
    where
        H: SpriteHost + ?Sized,
    {
        let degrees = self.get_rotation(id) + delta;
        self.set_rotation(host, id, degrees)
    }

    /// Forget the rotation state of a sprite.
    ///
    /// A later [`set_rotation`](Self::set_rotation) starts over from the
    /// sprite's image at that time.
    pub fn release(&mut self, id: SpriteId) -> Option<RotationState> {
        let state = self.states.remove(&id);
        if let Some(state) = &state {
            debug!(
                "RotationRegistry::release: {} at {} degrees",
                id,
                state.rotation()
            );
        }
        state
    }

    /// Rotation state of a sprite, if it is tracked.
    pub fn state(&self, id: SpriteId) -> Option<&RotationState> {
        self.states.get(&id)
    }

    /// True if the sprite is tracked.
    pub fn contains(&self, id: SpriteId) -> bool {
        self.states.contains_key(&id)
    }

    /// Number of tracked sprites.
    pub fn len(&self) -> usize {
        self.states.len()
    }

    /// True if no sprite is tracked.
    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }

    /// Ids of all tracked sprites, in no particular order.
    pub fn sprite_ids(&self) -> impl Iterator<Item = SpriteId> + '_ {
        self.states.keys().copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{SpriteTable, Upscaler};
    use pixspin_core::Image;

    fn setup() -> (SpriteTable, SpriteId) {
        let mut table = SpriteTable::new();
        let image = Image::from_art("1 2\n3 4\n5 6").unwrap();
        let id = table.spawn(image);
        (table, id)
    }

    #[test]
    fn test_get_rotation_untracked() {
        let registry = RotationRegistry::new();
        assert_eq!(registry.get_rotation(SpriteId::new(42)), 0.0);
        assert!(registry.is_empty());
    }

    #[test]
    fn test_set_rotation_installs_image() {
        let (mut table, id) = setup();
        let mut registry = RotationRegistry::new();

        registry.set_rotation(&mut table, id, 90.0).unwrap();
        assert_eq!(registry.get_rotation(id), 90.0);
        assert_eq!(registry.len(), 1);

        let shown = table.image(id).unwrap();
        assert_eq!(shown.dimensions(), (3, 2));
        assert_eq!(shown.data(), &[5, 3, 1, 6, 4, 2]);
    }

    #[test]
    fn test_state_created_once() {
        let (mut table, id) = setup();
        let mut registry = RotationRegistry::new();

        registry.set_rotation(&mut table, id, 90.0).unwrap();
        registry.set_rotation(&mut table, id, 180.0).unwrap();
        // The original is still the unrotated snapshot, not the 90 degree frame
        let state = registry.state(id).unwrap();
        assert_eq!(state.original().dimensions(), (2, 3));
        assert_eq!(state.original().data(), &[1, 2, 3, 4, 5, 6]);
        assert_eq!(table.image(id).unwrap().data(), &[6, 5, 4, 3, 2, 1]);
    }

    #[test]
    fn test_change_rotation() {
        let (mut table, id) = setup();
        let mut registry = RotationRegistry::new();

        registry.change_rotation(&mut table, id, -45.0).unwrap();
        registry.change_rotation(&mut table, id, -45.0).unwrap();
        assert_eq!(registry.get_rotation(id), -90.0);
        assert_eq!(table.image(id).unwrap().data(), &[2, 4, 6, 1, 3, 5]);
    }

    #[test]
    fn test_unknown_sprite() {
        let mut table = SpriteTable::new();
        let mut registry = RotationRegistry::new();
        let ghost = SpriteId::new(99);

        assert!(matches!(
            registry.set_rotation(&mut table, ghost, 10.0),
            Err(SpriteError::UnknownSprite(id)) if id == ghost
        ));
        assert!(!registry.contains(ghost));
    }

    #[test]
    fn test_destroyed_sprite_reports_unknown() {
        let (mut table, id) = setup();
        let mut registry = RotationRegistry::new();
        registry.set_rotation(&mut table, id, 90.0).unwrap();

        table.destroy(id);
        assert!(matches!(
            registry.set_rotation(&mut table, id, 180.0),
            Err(SpriteError::UnknownSprite(_))
        ));
        assert_eq!(registry.get_rotation(id), 90.0);

        // Relative turns build on the last angle that was displayed
        assert!(registry.change_rotation(&mut table, id, 45.0).is_err());
        assert_eq!(registry.get_rotation(id), 90.0);
    }

    #[test]
    fn test_invalid_angle_leaves_state_untouched() {
        let (mut table, id) = setup();
        let mut registry = RotationRegistry::new();

        assert!(registry.set_rotation(&mut table, id, f64::NAN).is_err());
        assert!(!registry.contains(id));

        registry.set_rotation(&mut table, id, 90.0).unwrap();
        assert!(
            registry
                .set_rotation(&mut table, id, f64::NEG_INFINITY)
                .is_err()
        );
        assert_eq!(registry.get_rotation(id), 90.0);
    }

    #[test]
    fn test_release() {
        let (mut table, id) = setup();
        let mut registry = RotationRegistry::new();
        registry.set_rotation(&mut table, id, 30.0).unwrap();

        let released = registry.release(id).unwrap();
        assert_eq!(released.rotation(), 30.0);
        assert!(!registry.contains(id));
        assert_eq!(registry.get_rotation(id), 0.0);
        assert!(registry.release(id).is_none());
    }

    #[test]
    fn test_config_is_used() {
        let (mut table, id) = setup();
        let config = RotationConfig::default().with_upscaler(Upscaler::Replicate);
        let mut registry = RotationRegistry::with_config(config);
        registry.set_rotation(&mut table, id, 0.0).unwrap();

        assert_eq!(registry.config().upscaler, Upscaler::Replicate);
        let state = registry.state(id).unwrap();
        assert_eq!(state.scaled().row(0), &[1, 1, 2, 2]);
        assert_eq!(state.scaled().row(1), &[1, 1, 2, 2]);
    }

    #[test]
    fn test_sprite_ids() {
        let mut table = SpriteTable::new();
        let a = table.spawn(Image::new(2, 2).unwrap());
        let b = table.spawn(Image::new(2, 2).unwrap());
        let mut registry = RotationRegistry::new();
        registry.set_rotation(&mut table, a, 0.0).unwrap();
        registry.set_rotation(&mut table, b, 0.0).unwrap();

        let mut ids: Vec<_> = registry.sprite_ids().collect();
        ids.sort();
        assert_eq!(ids, vec![a, b]);
    }
}
