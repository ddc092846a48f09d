//! Animated "neural network" background.
//!
//! `NetworkField` is the pure model: it owns the nodes, produces a `Frame`
//! of draw commands for a point in time and then advances node positions.
//! Painting the frame onto a canvas is the browser layer's job.

use rand::Rng;

pub const NODE_COUNT_BASE: usize = 36;
pub const NODE_COUNT_MAX: usize = 90;
/// Viewport area (px²) that adds one node above the base count.
pub const AREA_PER_NODE: f64 = 20_000.;
pub const CONNECTION_DISTANCE: f64 = 150.;
pub const NODE_RADIUS: f64 = 4.5;
pub const HIGHLIGHT_RADIUS: f64 = 40.;
pub const REPEL_RADIUS: f64 = 60.;
const REPEL_STRENGTH: f64 = 0.09;
const DRIFT_BLEND: f64 = 0.04;
const ANCHOR_SPEED: f64 = 0.2;
const MAX_INITIAL_SPEED: f64 = 0.35;
const SEED_RANGE: f64 = 1000.;

pub const PALETTE: [&str; 5] = ["#64c8ff", "#a084ee", "#fca311", "#ff4d6d", "#00f5d4"];
pub const HIGHLIGHT_COLOR: &str = "#fff";
/// Outer stop of a node's radial gradient.
pub const NODE_RIM_COLOR: &str = "#222a";

/// Number of nodes for a viewport, capped at `NODE_COUNT_MAX`.
pub fn node_count(width: f64, height: f64) -> usize {
    let area = (width.max(0.) * height.max(0.)) / AREA_PER_NODE;
    let extra = if area.is_finite() {
        area.floor() as usize
    } else {
        NODE_COUNT_MAX
    };
    NODE_COUNT_BASE.saturating_add(extra).min(NODE_COUNT_MAX)
}

fn lerp(a: f64, b: f64, t: f64) -> f64 {
    a + (b - a) * t
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn distance(self, other: Point) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Node {
    pub position: Point,
    pub anchor: Point,
    pub velocity: Point,
    pub seed: f64,
    pub palette_index: usize,
}

impl Node {
    fn spawn(index: usize, width: f64, height: f64, rng: &mut impl Rng) -> Self {
        let position = random_point(rng, width, height);
        let anchor = random_point(rng, width, height);
        Self {
            position,
            anchor,
            velocity: Point::new(
                (random_unit(rng) - 0.5) * 2. * MAX_INITIAL_SPEED,
                (random_unit(rng) - 0.5) * 2. * MAX_INITIAL_SPEED,
            ),
            seed: random_unit(rng) * SEED_RANGE,
            palette_index: index % PALETTE.len(),
        }
    }

    pub fn color(&self) -> &'static str {
        PALETTE[self.palette_index]
    }

    /// Where the organic drift wants the node to be at time `time`.
    fn drift_target(&self, time: f64) -> Point {
        let t = time + self.seed;
        Point::new(
            self.anchor.x + (t * 0.7).sin() * 32. + (t * 0.3).cos() * 18.,
            self.anchor.y + (t * 0.6).cos() * 32. + (t * 0.4).sin() * 18.,
        )
    }
}

fn random_unit(rng: &mut impl Rng) -> f64 {
    rng.random::<f64>()
}

fn random_point(rng: &mut impl Rng, width: f64, height: f64) -> Point {
    Point::new(
        random_unit(rng) * width.max(0.),
        random_unit(rng) * height.max(0.),
    )
}

/// Line between two nearby nodes.
#[derive(Debug, Clone, PartialEq)]
pub struct Link {
    pub from: Point,
    pub to: Point,
    pub color: &'static str,
    pub alpha: f64,
    pub glow: f64,
    pub width: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub enum DotFill {
    /// Radial gradient: white core, node color, dark rim.
    Gradient { color: &'static str, extent: f64 },
    Highlight,
}

impl DotFill {
    /// Color stops `(offset, color)` of the radial gradient, empty for a
    /// solid highlight.
    pub fn stops(&self) -> Vec<(f64, &'static str)> {
        match self {
            DotFill::Gradient { color, .. } => {
                vec![(0., HIGHLIGHT_COLOR), (0.5, *color), (1., NODE_RIM_COLOR)]
            }
            DotFill::Highlight => Vec::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Dot {
    pub center: Point,
    pub radius: f64,
    pub glow: f64,
    pub glow_color: &'static str,
    pub fill: DotFill,
}

/// Everything to draw for one refresh, in painting order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Frame {
    pub width: f64,
    pub height: f64,
    pub links: Vec<Link>,
    pub dots: Vec<Dot>,
}

pub struct NetworkField<R> {
    width: f64,
    height: f64,
    nodes: Vec<Node>,
    pointer: Option<Point>,
    rng: R,
}

impl<R: Rng> NetworkField<R> {
    pub fn new(width: f64, height: f64, mut rng: R) -> Self {
        let count = node_count(width, height);
        let nodes = (0..count)
            .map(|index| Node::spawn(index, width, height, &mut rng))
            .collect();
        Self {
            width,
            height,
            nodes,
            pointer: None,
            rng,
        }
    }

    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    pub fn size(&self) -> (f64, f64) {
        (self.width, self.height)
    }

    pub fn pointer(&self) -> Option<Point> {
        self.pointer
    }

    /// Pointer position in field coordinates; `None` when it left the canvas.
    pub fn set_pointer(&mut self, pointer: Option<Point>) {
        self.pointer = pointer;
    }

    /// Adapts the node set to a new viewport: appends fresh nodes or drops
    /// the newest ones until the count matches `node_count`.
    pub fn resize(&mut self, width: f64, height: f64) {
        self.width = width;
        self.height = height;
        let count = node_count(width, height);
        while self.nodes.len() < count {
            let index = self.nodes.len();
            let node = Node::spawn(index, width, height, &mut self.rng);
            self.nodes.push(node);
        }
        self.nodes.truncate(count);
    }

    /// Draw commands for time `time` (seconds).
    pub fn frame(&self, time: f64) -> Frame {
        let mut links = Vec::new();
        for (i, a) in self.nodes.iter().enumerate() {
            for (j, b) in self.nodes.iter().enumerate().skip(i + 1) {
                let distance = a.position.distance(b.position);
                if distance >= CONNECTION_DISTANCE {
                    continue;
                }
                let phase = time + (i + j) as f64;
                let pulse = 0.7 + 0.3 * (time * 2. + (i + j) as f64).sin();
                links.push(Link {
                    from: a.position,
                    to: b.position,
                    color: a.color(),
                    alpha: lerp(0.18, 0.45, 1. - distance / CONNECTION_DISTANCE) * pulse,
                    glow: 12. + 8. * phase.sin().abs(),
                    width: 1.2 + 0.8 * phase.sin().abs(),
                });
            }
        }

        let dots = self
            .nodes
            .iter()
            .map(|node| {
                let swell = (time + node.seed).sin().abs();
                let highlighted = self
                    .pointer
                    .is_some_and(|pointer| node.position.distance(pointer) < HIGHLIGHT_RADIUS);
                Dot {
                    center: node.position,
                    radius: NODE_RADIUS + 1.5 * swell,
                    glow: if highlighted { 32. } else { 18. + 8. * swell },
                    glow_color: node.color(),
                    fill: if highlighted {
                        DotFill::Highlight
                    } else {
                        DotFill::Gradient {
                            color: node.color(),
                            extent: NODE_RADIUS * 2.2,
                        }
                    },
                }
            })
            .collect();

        Frame {
            width: self.width,
            height: self.height,
            links,
            dots,
        }
    }

    /// Moves every node one step: drift toward its anchor path, get pushed
    /// away by the pointer, then move the anchor and bounce it off the edges.
    pub fn advance(&mut self, time: f64) {
        let (width, height, pointer) = (self.width, self.height, self.pointer);
        for node in &mut self.nodes {
            let target = node.drift_target(time);
            node.position.x = lerp(node.position.x, target.x, DRIFT_BLEND);
            node.position.y = lerp(node.position.y, target.y, DRIFT_BLEND);

            if let Some(pointer) = pointer {
                let dx = node.position.x - pointer.x;
                let dy = node.position.y - pointer.y;
                let distance = dx.hypot(dy);
                if distance < REPEL_RADIUS {
                    let angle = dy.atan2(dx);
                    let push = (REPEL_RADIUS - distance) * REPEL_STRENGTH;
                    node.position.x += angle.cos() * push;
                    node.position.y += angle.sin() * push;
                }
            }

            node.anchor.x += node.velocity.x * ANCHOR_SPEED;
            node.anchor.y += node.velocity.y * ANCHOR_SPEED;
            bounce(&mut node.anchor.x, &mut node.velocity.x, width);
            bounce(&mut node.anchor.y, &mut node.velocity.y, height);
        }
    }

    /// `frame` followed by `advance`: one full refresh.
    pub fn tick(&mut self, time: f64) -> Frame {
        let frame = self.frame(time);
        self.advance(time);
        frame
    }
}

/// Reflects `velocity` when `coordinate` leaves `[NODE_RADIUS, extent - NODE_RADIUS]`
/// and clamps it back inside.
fn bounce(coordinate: &mut f64, velocity: &mut f64, extent: f64) {
    let low = NODE_RADIUS;
    let high = (extent - NODE_RADIUS).max(low);
    if *coordinate < low || *coordinate > high {
        *velocity = -*velocity;
    }
    *coordinate = coordinate.clamp(low, high);
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::SmallRng;

    fn field(width: f64, height: f64) -> NetworkField<SmallRng> {
        NetworkField::new(width, height, SmallRng::seed_from_u64(11))
    }

    #[test]
    fn node_count_scales_with_area() {
        assert_eq!(node_count(0., 0.), NODE_COUNT_BASE);
        assert_eq!(node_count(200., 100.), NODE_COUNT_BASE + 1);
        assert_eq!(node_count(800., 600.), NODE_COUNT_BASE + 24);
        assert_eq!(node_count(1920., 1080.), NODE_COUNT_MAX);
        assert_eq!(node_count(f64::INFINITY, 10.), NODE_COUNT_MAX);
    }

    #[test]
    fn node_count_is_monotonic_in_area() {
        let mut previous = 0;
        let mut width = 10.;
        while width < 10_000. {
            let count = node_count(width, width * 0.75);
            assert!(count >= previous);
            assert!(count <= NODE_COUNT_MAX);
            previous = count;
            width *= 1.41;
        }
    }

    #[test]
    fn resize_grows_and_shrinks_to_count() {
        let mut field = field(400., 300.);
        assert_eq!(field.nodes().len(), node_count(400., 300.));

        field.resize(1600., 1200.);
        assert_eq!(field.nodes().len(), NODE_COUNT_MAX);
        assert_eq!(field.nodes()[89].palette_index, 89 % PALETTE.len());

        field.resize(100., 100.);
        assert_eq!(field.nodes().len(), NODE_COUNT_BASE);
    }

    #[test]
    fn links_only_between_close_nodes() {
        let field = field(1200., 800.);
        let frame = field.frame(0.);
        assert_eq!(frame.dots.len(), field.nodes().len());
        for link in &frame.links {
            assert!(link.from.distance(link.to) < CONNECTION_DISTANCE);
            assert!(link.alpha > 0. && link.alpha <= 0.45);
            assert!((1.2..=2.0).contains(&link.width));
        }
    }

    #[test]
    fn pointer_highlights_nearby_nodes() {
        let mut field = field(800., 600.);
        let target = field.nodes()[0].position;
        field.set_pointer(Some(Point::new(target.x + 5., target.y)));

        let frame = field.frame(1.);
        assert_eq!(frame.dots[0].fill, DotFill::Highlight);
        assert_eq!(frame.dots[0].glow, 32.);

        field.set_pointer(None);
        assert!(field.frame(1.).dots.iter().all(|dot| dot.fill != DotFill::Highlight));
    }

    #[test]
    fn pointer_repels_after_drift() {
        let mut free = field(800., 600.);
        free.advance(1.);
        let drifted = free.nodes()[0].position;

        // Same seed, so node 0 drifts to the same spot before the push.
        let mut pushed = field(800., 600.);
        pushed.set_pointer(Some(Point::new(drifted.x + 5., drifted.y)));
        pushed.advance(1.);
        let position = pushed.nodes()[0].position;

        let expected_push = (REPEL_RADIUS - 5.) * REPEL_STRENGTH;
        assert!((drifted.x - position.x - expected_push).abs() < 1e-9);
        assert!((drifted.y - position.y).abs() < 1e-9);
    }

    #[test]
    fn anchors_stay_inside_bounds() {
        let mut field = field(300., 200.);
        for step in 0..5_000 {
            field.advance(step as f64 / 60.);
        }
        for node in field.nodes() {
            assert!((NODE_RADIUS..=300. - NODE_RADIUS).contains(&node.anchor.x));
            assert!((NODE_RADIUS..=200. - NODE_RADIUS).contains(&node.anchor.y));
        }
    }

    #[test]
    fn gradient_puts_node_color_midway() {
        let fill = DotFill::Gradient {
            color: PALETTE[1],
            extent: NODE_RADIUS * 2.2,
        };
        assert_eq!(
            fill.stops(),
            [(0., HIGHLIGHT_COLOR), (0.5, PALETTE[1]), (1., NODE_RIM_COLOR)]
        );
        assert!(DotFill::Highlight.stops().is_empty());
    }

    #[test]
    fn bounce_reflects_velocity() {
        let mut x = -1.;
        let mut vx = -0.3;
        bounce(&mut x, &mut vx, 100.);
        assert_eq!(x, NODE_RADIUS);
        assert_eq!(vx, 0.3);
    }
}
