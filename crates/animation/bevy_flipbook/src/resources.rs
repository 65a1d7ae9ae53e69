use bevy::prelude::*;
use flipbook_core::FrameRef;
use std::collections::HashMap;

/// Index from frame reference (e.g., "hero/walk_0") to the image that renders it.
#[derive(Resource, Default)]
pub struct FrameAtlas {
    pub map: HashMap<String, Handle<Image>>,
}

impl FrameAtlas {
    pub fn insert(&mut self, frame: impl Into<String>, image: Handle<Image>) {
        self.map.insert(frame.into(), image);
    }

    pub fn get(&self, frame: &FrameRef) -> Option<&Handle<Image>> {
        self.map.get(frame.as_str())
    }
}
