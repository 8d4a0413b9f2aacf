use sofa_rs::Layout;
use sofa_rs::entities::{Piece, PieceKind};
use sofa_rs::geometry::primitives::{Point, Rect};
use svg::Document;
use svg::node::element::{Group, Rectangle, Title};

use crate::io::colors::ColorResolution;
use crate::io::svg_export::{self, Flip};
use crate::io::svg_util::{SvgDrawOptions, darken};

const MARGIN: f64 = 40.0;

pub fn layout_to_svg(layout: &Layout, colors: &ColorResolution, options: SvgDrawOptions) -> Document {
    let theme = options.theme.get_theme();
    let anchors = &layout.anchors;
    let flip = Flip {
        canvas_height: anchors.canvas_height,
    };
    let footprint = anchors.footprint;

    let vbox = (
        footprint.x_min - MARGIN,
        anchors.canvas_height - footprint.y_max - MARGIN,
        footprint.width() + 2.0 * MARGIN,
        footprint.height() + 2.0 * MARGIN,
    );
    let stroke_width = f64::min(vbox.2, vbox.3) * 0.001 * theme.stroke_width_multiplier;
    let font_size = format!("{}", theme.font_size);

    let piece_group = |id: &str, pieces: &[Piece], fill: &str| {
        let stroke = darken(fill, 0.5).unwrap_or_else(|_| theme.contour.to_string());
        pieces.iter().enumerate().fold(Group::new().set("id", id), |group, (i, piece)| {
            let bbox = piece.bbox();
            let mut g = Group::new()
                .set("id", format!("{id}_{i}"))
                .add(Title::new(format!(
                    "{:?} {}, {}x{} cm",
                    piece.kind, piece.side, piece.length, piece.width
                )))
                .add(svg_export::data_to_path(
                    svg_export::polygon_data(&piece.polygon, flip),
                    &[
                        ("fill", fill),
                        ("stroke", &*stroke),
                        ("stroke-width", &*format!("{}", stroke_width)),
                    ],
                ));
            if options.labels && piece.kind != PieceKind::CornerBlock {
                g = g.add(svg_export::label(
                    format!("{}x{}", piece.length, piece.width),
                    bbox.centroid(),
                    flip,
                    &[("font-size", &*font_size), ("fill", theme.text)],
                ));
            }
            group.add(g)
        })
    };

    let pieces = &layout.pieces;
    let banquettes_group = piece_group("banquettes", &pieces.banquettes, &colors.seat.hex);
    let backrests_group = piece_group("backrests", &pieces.backrests, &colors.backrests.hex);
    let armrests_group = piece_group("armrests", &pieces.armrests, &colors.armrests.hex);
    let corner_blocks_group = piece_group("corner_blocks", &pieces.corner_blocks, &colors.backrests.hex);

    let cushions_group = {
        let stroke = darken(&colors.cushions.hex, 0.4).unwrap_or_else(|_| theme.contour.to_string());
        let mut group = Group::new().set("id", "cushions");
        for branch in &layout.cushions.branches {
            for (i, rect) in branch.cushions.iter().enumerate() {
                let mut g = Group::new()
                    .set("id", format!("cushion_{}_{i}", branch.side))
                    .add(Title::new(format!("cushion {}, {} cm", branch.side, branch.size)))
                    .add(svg_export::data_to_path(
                        svg_export::aa_rect_data(rect, flip),
                        &[
                            ("fill", &*colors.cushions.hex),
                            ("fill-opacity", "0.85"),
                            ("stroke", &*stroke),
                            ("stroke-width", &*format!("{}", stroke_width)),
                        ],
                    ));
                if options.labels {
                    g = g.add(svg_export::label(
                        format!("{}", branch.size),
                        rect.centroid(),
                        flip,
                        &[("font-size", &*font_size), ("fill", theme.text)],
                    ));
                }
                group = group.add(g);
            }
        }
        group
    };

    let bolsters_group = {
        let stroke = darken(&colors.bolsters.hex, 0.4).unwrap_or_else(|_| theme.contour.to_string());
        let mut group = Group::new().set("id", "bolsters");
        for bolster in &layout.cushions.bolsters {
            let (length, width) = bolster.rect.nominal_dims();
            let mut g = Group::new()
                .add(Title::new(format!("bolster {}, {length}x{width} cm", bolster.branch)))
                .add(svg_export::data_to_path(
                    svg_export::aa_rect_data(&bolster.rect, flip),
                    &[
                        ("fill", &*colors.bolsters.hex),
                        ("stroke", &*stroke),
                        ("stroke-width", &*format!("{}", stroke_width)),
                    ],
                ));
            if options.labels {
                g = g.add(svg_export::label(
                    format!("{length}x{width}"),
                    bolster.rect.centroid(),
                    flip,
                    &[("font-size", &*font_size), ("fill", theme.text)],
                ));
            }
            group = group.add(g);
        }
        group
    };

    let dimensions_group = match options.dimensions {
        false => None,
        true => Some(dimensions(&footprint, flip, stroke_width, theme.contour, &font_size)),
    };

    let anchors_group = match options.anchors {
        false => None,
        true => {
            let group = Group::new()
                .set("id", "anchors")
                .add(svg_export::point(anchors.frame_corner, flip, Some("red"), None));
            Some(anchors.junctions.iter().fold(group, |g, j| {
                g.add(svg_export::point(j.frame_corner, flip, Some("blue"), None))
            }))
        }
    };

    let optionals = [dimensions_group, anchors_group]
        .into_iter()
        .flatten()
        .fold(Group::new().set("id", "optionals"), |g, opt| g.add(opt));

    let background = Rectangle::new()
        .set("x", vbox.0)
        .set("y", vbox.1)
        .set("width", vbox.2)
        .set("height", vbox.3)
        .set("fill", theme.background);

    Document::new()
        .set("viewBox", vbox)
        .add(Title::new(format!(
            "{}, {}",
            layout.summary.layout, layout.summary.cushion_policy
        )))
        .add(background)
        .add(banquettes_group)
        .add(cushions_group)
        .add(bolsters_group)
        .add(backrests_group)
        .add(armrests_group)
        .add(corner_blocks_group)
        .add(optionals)
}

/// Overall width below the footprint, overall height left of it.
fn dimensions(footprint: &Rect, flip: Flip, stroke_width: f64, color: &str, font_size: &str) -> Group {
    let offset = MARGIN / 2.0;
    let style = [
        ("fill", "none"),
        ("stroke", color),
        ("stroke-width", &*format!("{}", stroke_width)),
    ];
    let text_style = [("font-size", font_size), ("fill", color)];

    let y = footprint.y_min - offset;
    let x = footprint.x_min - offset;
    let width_line = svg::node::element::path::Data::new()
        .move_to(flip.point(Point(footprint.x_min, y)))
        .line_to(flip.point(Point(footprint.x_max, y)));
    let height_line = svg::node::element::path::Data::new()
        .move_to(flip.point(Point(x, footprint.y_min)))
        .line_to(flip.point(Point(x, footprint.y_max)));

    Group::new()
        .set("id", "dimensions")
        .add(svg_export::data_to_path(width_line, &style))
        .add(svg_export::data_to_path(height_line, &style))
        .add(svg_export::label(
            format!("{} cm", footprint.width()),
            Point((footprint.x_min + footprint.x_max) / 2.0, y - offset / 2.0),
            flip,
            &text_style,
        ))
        .add(
            svg_export::label(
                format!("{} cm", footprint.height()),
                Point(x - offset / 2.0, (footprint.y_min + footprint.y_max) / 2.0),
                flip,
                &text_style,
            )
            .set("writing-mode", "tb"),
        )
}
