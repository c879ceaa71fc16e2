//! Hierarchy of bodies, each orbiting its parent
//!
//! The [`SolarSystem`] owns every body in an identity-keyed table. Each
//! non-root body carries an [`OrbitalState`] relative to its parent, so
//! absolute positions are sums of offsets along tree paths.

use std::collections::HashMap;
use tracing::debug;
use units::Mass;

use crate::body::{Body, BodyId};
use crate::error::{OrbitError, Result};
use crate::forces::gravity::sphere_of_influence;
use crate::orbital_state::OrbitalState;
use crate::position::Position;
use crate::vector::Vector3D;

#[derive(Debug)]
pub(crate) struct Node {
    pub(crate) body: Body,
    /// Orbit around the parent; `None` only for the root
    pub(crate) state: Option<OrbitalState>,
    /// Orbital time of `state` when the system clock read zero
    pub(crate) epoch: f64,
    pub(crate) parent: Option<BodyId>,
    pub(crate) children: Vec<BodyId>,
}

impl Node {
    fn position(&self) -> Vector3D {
        self.state.map_or_else(Vector3D::zeros, |s| s.position())
    }

    fn velocity(&self) -> Vector3D {
        self.state.map_or_else(Vector3D::zeros, |s| s.velocity())
    }
}

/// A tree of bodies rooted at a single central body.
///
/// Single-threaded and deliberately not `Clone`; share it behind one
/// external lock if several threads need it.
///
/// # Examples
///
/// ```
/// use kepler::body::{Body, BodyId};
/// use kepler::system::SolarSystem;
/// use kepler::vector::Vector3D;
/// use units::Mass;
///
/// let sun = Body::new(BodyId(0), "Sun", Mass::from_kg(1.9885e30));
/// let mut system = SolarSystem::new(sun);
///
/// let earth = Body::new(BodyId(1), "Earth", Mass::from_kg(5.9722e24));
/// system
///     .add_body_with_vectors(
///         earth,
///         Vector3D::new(0.0, 1.47095e11, 0.0),
///         Vector3D::new(3.029e4, 0.0, 0.0),
///         BodyId(0),
///     )
///     .unwrap();
///
/// let around_sun = system.relative_to(BodyId(0)).unwrap();
/// assert_eq!(around_sun.len(), 2);
/// ```
#[derive(Debug)]
pub struct SolarSystem {
    pub(crate) nodes: HashMap<BodyId, Node>,
    pub(crate) root: BodyId,
    time: f64,
}

impl SolarSystem {
    pub fn new(root: Body) -> Self {
        let id = root.id();
        let mut nodes = HashMap::new();
        nodes.insert(
            id,
            Node {
                body: root,
                state: None,
                epoch: 0.0,
                parent: None,
                children: Vec::new(),
            },
        );
        Self {
            nodes,
            root: id,
            time: 0.0,
        }
    }

    /// Seconds elapsed on the system clock
    pub fn time(&self) -> f64 {
        self.time
    }

    /// Advance the system clock. Orbital states are not touched until
    /// [`propagate`](Self::propagate) is called.
    pub fn tick(&mut self, seconds: f64) {
        self.time += seconds;
    }

    pub fn root(&self) -> BodyId {
        self.root
    }

    pub fn body_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn contains(&self, id: BodyId) -> bool {
        self.nodes.contains_key(&id)
    }

    /// All bodies in unspecified order
    pub fn bodies(&self) -> impl Iterator<Item = &Body> {
        self.nodes.values().map(|n| &n.body)
    }

    pub fn body(&self, id: BodyId) -> Result<&Body> {
        Ok(&self.node(id)?.body)
    }

    /// Mutable access to a body's name and spin.
    ///
    /// Identity and mass stay read-only through this handle:
    ///
    /// ```compile_fail
    /// use kepler::body::{Body, BodyId};
    /// use kepler::system::SolarSystem;
    /// use units::Mass;
    ///
    /// let mut system = SolarSystem::new(Body::new(BodyId(0), "Sun", Mass::from_solar_masses(1.0)));
    /// system.body_mut(BodyId(0)).unwrap().id = BodyId(7);
    /// ```
    pub fn body_mut(&mut self, id: BodyId) -> Result<&mut Body> {
        Ok(&mut self.node_mut(id)?.body)
    }

    pub fn parent(&self, id: BodyId) -> Result<Option<BodyId>> {
        Ok(self.node(id)?.parent)
    }

    pub fn children(&self, id: BodyId) -> Result<&[BodyId]> {
        Ok(&self.node(id)?.children)
    }

    /// Orbit of `id` around its parent; `None` for the root
    pub fn orbital_state(&self, id: BodyId) -> Result<Option<&OrbitalState>> {
        Ok(self.node(id)?.state.as_ref())
    }

    /// Insert `body` orbiting `parent`, deriving its orbit from a position
    /// and velocity relative to the parent.
    ///
    /// # Errors
    ///
    /// [`OrbitError::DuplicateBody`], [`OrbitError::UnknownBody`] for a
    /// missing parent, or [`OrbitError::DegenerateOrbit`] from the element
    /// derivation.
    pub fn add_body_with_vectors(
        &mut self,
        body: Body,
        position: Vector3D,
        velocity: Vector3D,
        parent: BodyId,
    ) -> Result<()> {
        self.check_insert(body.id(), parent)?;
        let parent_mass = self.node(parent)?.body.mass();
        let state = OrbitalState::from_vectors(position, velocity, parent_mass)?;
        self.add_body(body, state, parent)
    }

    /// Insert `body` orbiting `parent` with a precomputed state
    pub fn add_body(&mut self, body: Body, state: OrbitalState, parent: BodyId) -> Result<()> {
        self.check_insert(body.id(), parent)?;

        let id = body.id();
        debug!(
            body = ?id,
            name = %body.name,
            parent = ?parent,
            semi_major_axis = state.orbit().semi_major_axis(),
            eccentricity = state.orbit().eccentricity(),
            "adding body"
        );

        self.node_mut(parent)?.children.push(id);
        self.nodes.insert(
            id,
            Node {
                body,
                epoch: state.time() - self.time,
                state: Some(state),
                parent: Some(parent),
                children: Vec::new(),
            },
        );
        Ok(())
    }

    /// Insert `body` under the deepest body whose sphere of influence
    /// contains `position`.
    ///
    /// `position` and `velocity` are relative to the root. Descends from the
    /// root, converting the state into each chosen child's frame. When
    /// spheres overlap the one whose centre is closest wins. Returns the
    /// chosen parent.
    pub fn add_body_in_influence(
        &mut self,
        body: Body,
        position: Vector3D,
        velocity: Vector3D,
    ) -> Result<BodyId> {
        if self.contains(body.id()) {
            return Err(OrbitError::DuplicateBody(body.id()));
        }

        let mut parent = self.root;
        let mut position = position;
        let mut velocity = velocity;

        loop {
            let inside = self.node(parent)?.children.iter().filter_map(|child_id| {
                let child = self.nodes.get(child_id)?;
                let state = child.state?;
                let orbit = state.orbit();
                let radius = sphere_of_influence(
                    child.body.mass(),
                    orbit.semi_major_axis(),
                    orbit.parent_mass(),
                );
                let local = position - state.position();
                (local.magnitude() < radius).then(|| (*child_id, local, velocity - state.velocity()))
            });

            let closest = inside.min_by(|a, b| a.1.magnitude2().total_cmp(&b.1.magnitude2()));
            match closest {
                Some((child_id, local_position, local_velocity)) => {
                    debug!(body = ?body.id(), within = ?child_id, "inside sphere of influence");
                    parent = child_id;
                    position = local_position;
                    velocity = local_velocity;
                }
                None => break,
            }
        }

        self.add_body_with_vectors(body, position, velocity, parent)?;
        Ok(parent)
    }

    /// Remove a body, handing its children to its parent.
    ///
    /// Each child keeps its position and velocity; its orbit is re-derived
    /// against the new parent's mass. Nothing changes if any child's orbit
    /// cannot be re-derived.
    ///
    /// # Errors
    ///
    /// [`OrbitError::InvalidOperation`] for the root,
    /// [`OrbitError::UnknownBody`], or [`OrbitError::DegenerateOrbit`] from
    /// re-deriving a child.
    pub fn remove_body(&mut self, id: BodyId) -> Result<Body> {
        let node = self.node(id)?;
        let Some(parent) = node.parent else {
            return Err(OrbitError::InvalidOperation(format!(
                "cannot remove root body {id:?}"
            )));
        };

        let offset_position = node.position();
        let offset_velocity = node.velocity();
        let parent_mass = self.node(parent)?.body.mass();

        let restated = node
            .children
            .iter()
            .map(|child_id| -> Result<(BodyId, OrbitalState)> {
                let child = self.node(*child_id)?;
                let state = OrbitalState::from_vectors(
                    offset_position + child.position(),
                    offset_velocity + child.velocity(),
                    parent_mass,
                )?;
                Ok((*child_id, state))
            })
            .collect::<Result<Vec<_>>>()?;

        let removed = self.nodes.remove(&id).ok_or(OrbitError::UnknownBody(id))?;

        for (child_id, state) in restated {
            debug!(body = ?child_id, from = ?id, to = ?parent, "re-parenting body");
            self.node_mut(child_id)?.parent = Some(parent);
            self.restate(child_id, state)?;
        }

        let parent_node = self.node_mut(parent)?;
        parent_node.children.retain(|c| *c != id);
        parent_node.children.extend(removed.children.iter().copied());

        debug!(body = ?id, name = %removed.body.name, "removed body");
        Ok(removed.body)
    }

    /// Change the mass of a body already in the system.
    ///
    /// Each child keeps its position and velocity relative to the body; its
    /// orbit is re-derived against the new mass. Nothing changes if any
    /// child's orbit cannot be re-derived.
    ///
    /// # Errors
    ///
    /// [`OrbitError::UnknownBody`], [`OrbitError::InvalidOperation`] for a
    /// negative or non-finite mass, or [`OrbitError::DegenerateOrbit`] from
    /// re-deriving a child.
    pub fn set_mass(&mut self, id: BodyId, mass: Mass) -> Result<()> {
        let kg = mass.to_kg();
        if !(kg >= 0.0 && kg.is_finite()) {
            return Err(OrbitError::InvalidOperation(format!(
                "mass of {id:?} must be finite and non-negative, got {kg} kg"
            )));
        }

        let restated = self
            .node(id)?
            .children
            .iter()
            .map(|child_id| -> Result<(BodyId, OrbitalState)> {
                let child = self.node(*child_id)?;
                let state = OrbitalState::from_vectors(child.position(), child.velocity(), mass)?;
                Ok((*child_id, state))
            })
            .collect::<Result<Vec<_>>>()?;

        debug!(body = ?id, kg, children = restated.len(), "changing mass");
        self.node_mut(id)?.body.set_mass(mass);
        for (child_id, state) in restated {
            self.restate(child_id, state)?;
        }
        Ok(())
    }

    /// Every body paired with its position relative to `id`.
    ///
    /// Offsets are accumulated in [`Position`] so sums along long paths
    /// keep sub-meter precision. Order is unspecified.
    pub fn relative_to(&self, id: BodyId) -> Result<Vec<(&Body, Position)>> {
        let mut list = Vec::with_capacity(self.nodes.len());
        let mut current_id = id;
        let mut current = self.node(id)?;
        let mut offset = Position::origin();

        self.collect_subtree(id, offset, &mut list)?;

        while let Some(parent_id) = current.parent {
            // `offset` moves from the current node to its parent
            offset -= current.position();
            let parent = self.node(parent_id)?;
            list.push((&parent.body, offset));

            for sibling in parent.children.iter().filter(|c| **c != current_id) {
                let at = offset + self.node(*sibling)?.position();
                self.collect_subtree(*sibling, at, &mut list)?;
            }
            current_id = parent_id;
            current = parent;
        }

        Ok(list)
    }

    /// Set every orbital state to its epoch plus the system clock.
    ///
    /// # Errors
    ///
    /// [`OrbitError::UndefinedPeriod`] if any body is on an open orbit; no
    /// state is changed in that case.
    pub fn propagate(&mut self) -> Result<()> {
        let clock = self.time;
        let updated = self
            .nodes
            .iter()
            .filter_map(|(id, node)| node.state.map(|state| (*id, state, node.epoch)))
            .map(|(id, mut state, epoch)| -> Result<(BodyId, OrbitalState)> {
                state.set_time(epoch + clock)?;
                Ok((id, state))
            })
            .collect::<Result<Vec<_>>>()?;

        for (id, state) in updated {
            self.node_mut(id)?.state = Some(state);
        }
        Ok(())
    }

    fn node(&self, id: BodyId) -> Result<&Node> {
        self.nodes.get(&id).ok_or(OrbitError::UnknownBody(id))
    }

    fn node_mut(&mut self, id: BodyId) -> Result<&mut Node> {
        self.nodes.get_mut(&id).ok_or(OrbitError::UnknownBody(id))
    }

    /// Replace a node's orbit, keeping `propagate` anchored to the clock
    fn restate(&mut self, id: BodyId, state: OrbitalState) -> Result<()> {
        let clock = self.time;
        let node = self.node_mut(id)?;
        node.epoch = state.time() - clock;
        node.state = Some(state);
        Ok(())
    }

    fn check_insert(&self, id: BodyId, parent: BodyId) -> Result<()> {
        if self.contains(id) {
            return Err(OrbitError::DuplicateBody(id));
        }
        self.node(parent).map(|_| ())
    }

    /// Push `start` at `at` and all of its descendants
    fn collect_subtree<'a>(
        &'a self,
        start: BodyId,
        at: Position,
        list: &mut Vec<(&'a Body, Position)>,
    ) -> Result<()> {
        let mut stack = vec![(start, at)];
        while let Some((id, at)) = stack.pop() {
            let node = self.node(id)?;
            list.push((&node.body, at));
            for child in &node.children {
                stack.push((*child, at + self.node(*child)?.position()));
            }
        }
        Ok(())
    }
}
