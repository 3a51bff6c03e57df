// extensions/targets.rs
//
// Built-in tween targets that drive Entity properties in a Scene.
//
// Usage:
//   let mut tweens = TweenProcessor::<Scene>::new();
//   tweens.create(&scene, Tween::new(EntityTween::position(id, to), 0.5)
//       .with_ease(Easing::QuadOut));
//   tweens.advance(dt, &mut scene);
//
// The start value is read from the entity when the tween is created, so a
// tween always departs from wherever the entity currently is.

use glam::{Vec2, Vec4};
use crate::api::types::{EntityId, TargetKey};
use crate::components::entity::Entity;
use crate::core::scene::Scene;
use crate::core::target::TweenTarget;
use super::easing::{lerp, lerp_vec2, lerp_vec4};

/// Which entity property a tween animates, holding one endpoint.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum EntityProperty {
    Position(Vec2),
    PositionX(f32),
    PositionY(f32),
    Rotation(f32),
    Scale(Vec2),
    ScaleX(f32),
    ScaleY(f32),
    Tint(Vec4),
    Alpha(f32),
}

impl EntityProperty {
    /// Stable per-property channel, used in `TargetKey`.
    pub fn channel(self) -> u32 {
        match self {
            EntityProperty::Position(_) => 0,
            EntityProperty::PositionX(_) => 1,
            EntityProperty::PositionY(_) => 2,
            EntityProperty::Rotation(_) => 3,
            EntityProperty::Scale(_) => 4,
            EntityProperty::ScaleX(_) => 5,
            EntityProperty::ScaleY(_) => 6,
            EntityProperty::Tint(_) => 7,
            EntityProperty::Alpha(_) => 8,
        }
    }

    /// The same property, holding the entity's current value.
    fn read(self, e: &Entity) -> Self {
        match self {
            EntityProperty::Position(_) => EntityProperty::Position(e.pos),
            EntityProperty::PositionX(_) => EntityProperty::PositionX(e.pos.x),
            EntityProperty::PositionY(_) => EntityProperty::PositionY(e.pos.y),
            EntityProperty::Rotation(_) => EntityProperty::Rotation(e.rotation),
            EntityProperty::Scale(_) => EntityProperty::Scale(e.scale),
            EntityProperty::ScaleX(_) => EntityProperty::ScaleX(e.scale.x),
            EntityProperty::ScaleY(_) => EntityProperty::ScaleY(e.scale.y),
            EntityProperty::Tint(_) => EntityProperty::Tint(e.tint),
            EntityProperty::Alpha(_) => EntityProperty::Alpha(e.alpha),
        }
    }

    fn write(self, e: &mut Entity) {
        match self {
            EntityProperty::Position(v) => e.pos = v,
            EntityProperty::PositionX(v) => e.pos.x = v,
            EntityProperty::PositionY(v) => e.pos.y = v,
            EntityProperty::Rotation(v) => e.rotation = v,
            EntityProperty::Scale(v) => e.scale = v,
            EntityProperty::ScaleX(v) => e.scale.x = v,
            EntityProperty::ScaleY(v) => e.scale.y = v,
            EntityProperty::Tint(v) => e.tint = v,
            EntityProperty::Alpha(v) => e.alpha = v,
        }
    }

    /// Interpolate towards `to`. Mismatched variants snap to `to`.
    fn lerp_to(self, to: Self, t: f32) -> Self {
        use EntityProperty as P;
        match (self, to) {
            (P::Position(a), P::Position(b)) => P::Position(lerp_vec2(a, b, t)),
            (P::PositionX(a), P::PositionX(b)) => P::PositionX(lerp(a, b, t)),
            (P::PositionY(a), P::PositionY(b)) => P::PositionY(lerp(a, b, t)),
            (P::Rotation(a), P::Rotation(b)) => P::Rotation(lerp(a, b, t)),
            (P::Scale(a), P::Scale(b)) => P::Scale(lerp_vec2(a, b, t)),
            (P::ScaleX(a), P::ScaleX(b)) => P::ScaleX(lerp(a, b, t)),
            (P::ScaleY(a), P::ScaleY(b)) => P::ScaleY(lerp(a, b, t)),
            (P::Tint(a), P::Tint(b)) => P::Tint(lerp_vec4(a, b, t)),
            (P::Alpha(a), P::Alpha(b)) => P::Alpha(lerp(a, b, t)),
            _ => to,
        }
    }
}

/// Tween target moving one property of one entity towards an end value.
#[derive(Debug, Clone, Copy)]
pub struct EntityTween {
    entity: EntityId,
    from: EntityProperty,
    to: EntityProperty,
}

impl EntityTween {
    /// Animate `entity` towards `to`, starting from its value at creation.
    pub fn new(entity: EntityId, to: EntityProperty) -> Self {
        Self { entity, from: to, to }
    }

    pub fn position(entity: EntityId, to: Vec2) -> Self {
        Self::new(entity, EntityProperty::Position(to))
    }

    pub fn position_x(entity: EntityId, to: f32) -> Self {
        Self::new(entity, EntityProperty::PositionX(to))
    }

    pub fn position_y(entity: EntityId, to: f32) -> Self {
        Self::new(entity, EntityProperty::PositionY(to))
    }

    pub fn rotation(entity: EntityId, to: f32) -> Self {
        Self::new(entity, EntityProperty::Rotation(to))
    }

    pub fn scale(entity: EntityId, to: Vec2) -> Self {
        Self::new(entity, EntityProperty::Scale(to))
    }

    pub fn scale_uniform(entity: EntityId, to: f32) -> Self {
        Self::scale(entity, Vec2::splat(to))
    }

    pub fn tint(entity: EntityId, to: Vec4) -> Self {
        Self::new(entity, EntityProperty::Tint(to))
    }

    pub fn alpha(entity: EntityId, to: f32) -> Self {
        Self::new(entity, EntityProperty::Alpha(to))
    }

    /// Fade to opaque.
    pub fn fade_in(entity: EntityId) -> Self {
        Self::alpha(entity, 1.0)
    }

    /// Fade to transparent.
    pub fn fade_out(entity: EntityId) -> Self {
        Self::alpha(entity, 0.0)
    }

    pub fn entity(&self) -> EntityId {
        self.entity
    }

    /// The start value captured at creation (equal to `to` before then).
    pub fn from(&self) -> EntityProperty {
        self.from
    }

    pub fn to(&self) -> EntityProperty {
        self.to
    }
}

impl TweenTarget<Scene> for EntityTween {
    fn capture_start(&mut self, scene: &Scene) {
        if let Some(e) = scene.get(self.entity) {
            self.from = self.to.read(e);
        }
    }

    fn apply(&mut self, scene: &mut Scene, eased: f32) {
        if let Some(e) = scene.get_mut(self.entity) {
            self.from.lerp_to(self.to, eased).write(e);
        }
    }

    fn complete_immediately(&mut self, scene: &mut Scene) {
        if let Some(e) = scene.get_mut(self.entity) {
            self.to.write(e);
        }
    }

    fn is_alive(&self, scene: &Scene) -> bool {
        scene.is_live(self.entity)
    }

    fn key(&self) -> TargetKey {
        TargetKey::new(u64::from(self.entity.0), self.to.channel())
    }
}
