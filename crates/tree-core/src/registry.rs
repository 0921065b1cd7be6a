//! Ordered collection of every particle, with a capacity-bounded photo tail.
//!
//! Decorations are seeded once and never reordered. Photos are appended in
//! upload order; when the photo count reaches capacity the oldest photo is
//! evicted first (FIFO). The full sequence is always `decorations ++ photos`.

use std::collections::VecDeque;

use log::warn;
use rand::Rng;

use crate::constants::DEFAULT_PHOTO_CAPACITY;
use crate::particle::{EntityId, ImageHandle, Ornament, Particle, ParticleKind};

#[derive(Clone, Debug)]
pub struct ParticleRegistry {
    decorations: Vec<Particle>,
    photos: VecDeque<Particle>,
    capacity: usize,
    next_id: u64,
}

impl Default for ParticleRegistry {
    fn default() -> Self {
        Self::new(DEFAULT_PHOTO_CAPACITY)
    }
}

impl ParticleRegistry {
    /// A capacity of zero is raised to one so an upload always lands.
    pub fn new(photo_capacity: usize) -> Self {
        Self {
            decorations: Vec::new(),
            photos: VecDeque::new(),
            capacity: photo_capacity.max(1),
            next_id: 0,
        }
    }

    fn allocate_id(&mut self) -> EntityId {
        let id = EntityId(self.next_id);
        self.next_id += 1;
        id
    }

    /// Seed `count` decorations with random ornament variants and phase offsets.
    pub fn add_decorations<R: Rng + ?Sized>(&mut self, count: usize, rng: &mut R) {
        self.decorations.reserve(count);
        for _ in 0..count {
            let id = self.allocate_id();
            let ornament = Ornament::random(rng);
            self.decorations
                .push(Particle::new(id, ParticleKind::Decoration(ornament), rng));
        }
    }

    /// Append a photo wrapping `image`, evicting the oldest photo when full.
    ///
    /// Returns the evicted particle so the caller can release its image
    /// resource. Re-layout is the caller's responsibility and must follow in
    /// the same scheduling turn.
    pub fn add_photo<R: Rng + ?Sized>(&mut self, image: ImageHandle, rng: &mut R) -> Option<Particle> {
        let evicted = if self.photos.len() >= self.capacity {
            self.photos.pop_front()
        } else {
            None
        };
        if let Some(old) = &evicted {
            warn!(
                "photo capacity {} reached; evicting {:?} ({:?})",
                self.capacity,
                old.id(),
                old.image()
            );
        }
        let id = self.allocate_id();
        self.photos
            .push_back(Particle::new(id, ParticleKind::Photo(image), rng));
        evicted
    }

    /// Every particle in registry order: decorations first, then photos oldest-first.
    pub fn all(&self) -> impl Iterator<Item = &Particle> + '_ {
        self.decorations.iter().chain(self.photos.iter())
    }

    pub(crate) fn all_mut(&mut self) -> impl Iterator<Item = &mut Particle> + '_ {
        self.decorations.iter_mut().chain(self.photos.iter_mut())
    }

    pub fn decorations(&self) -> &[Particle] {
        &self.decorations
    }

    pub(crate) fn decorations_mut(&mut self) -> &mut [Particle] {
        &mut self.decorations
    }

    pub fn photos(&self) -> &VecDeque<Particle> {
        &self.photos
    }

    pub(crate) fn photos_mut(&mut self) -> &mut VecDeque<Particle> {
        &mut self.photos
    }

    pub fn get(&self, id: EntityId) -> Option<&Particle> {
        self.all().find(|p| p.id() == id)
    }

    pub fn contains(&self, id: EntityId) -> bool {
        self.get(id).is_some()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.decorations.len() + self.photos.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    #[inline]
    pub fn decoration_count(&self) -> usize {
        self.decorations.len()
    }

    #[inline]
    pub fn photo_count(&self) -> usize {
        self.photos.len()
    }

    #[inline]
    pub fn capacity(&self) -> usize {
        self.capacity
    }
}
