use sofa_rs::geometry::primitives::{Point, Polygon, Rect};
use svg::node::element::path::Data;
use svg::node::element::{Circle, Path, Text};

/// Converts layout coordinates (y up) to SVG coordinates (y down).
#[derive(Clone, Copy, Debug)]
pub struct Flip {
    pub canvas_height: f64,
}

impl Flip {
    pub fn point(&self, p: Point) -> (f64, f64) {
        let (x, y): (f64, f64) = p.into();
        (x, self.canvas_height - y)
    }
}

pub fn data_to_path(data: Data, params: &[(&str, &str)]) -> Path {
    let mut path = Path::new();
    for param in params {
        path = path.set(param.0, param.1)
    }
    path.set("d", data)
}

pub fn polygon_data(polygon: &Polygon, flip: Flip) -> Data {
    let mut points = polygon.points().iter().map(|p| flip.point(*p));
    let mut data = Data::new();
    if let Some(first) = points.next() {
        data = data.move_to(first);
    }
    for p in points {
        data = data.line_to(p);
    }
    data.close()
}

pub fn aa_rect_data(rect: &Rect, flip: Flip) -> Data {
    polygon_data(&Polygon::from(*rect), flip)
}

pub fn point(p: Point, flip: Flip, fill: Option<&str>, rad: Option<f64>) -> Circle {
    let (x, y) = flip.point(p);
    Circle::new()
        .set("cx", x)
        .set("cy", y)
        .set("r", rad.unwrap_or(1.5))
        .set("fill", fill.unwrap_or("black"))
}

/// Centered label at `at`.
pub fn label(content: String, at: Point, flip: Flip, params: &[(&str, &str)]) -> Text {
    let (x, y) = flip.point(at);
    let mut text = Text::new(content)
        .set("x", x)
        .set("y", y)
        .set("text-anchor", "middle")
        .set("dominant-baseline", "middle");
    for param in params {
        text = text.set(param.0, param.1)
    }
    text
}
