use crate::entities::{PackingResult, PatternFootprint, PrintMargins, SheetOrientation};
use crate::geometry::primitives::Rect;
use crate::io::svg::svg_util;
use crate::io::svg::svg_util::SvgDrawOptions;
use svg::Document;
use svg::node::element::{Definitions, Group, Text, Title, Use};

/// Draws the tiles of `packing` on their master sheet.
///
/// Every tile is drawn dashed, with the net pattern inside, offset by the print margins.
/// Unrotated and rotated tiles get a different fill. Sheet coordinates are kept:
/// the origin is the bottom-left corner of the sheet.
pub fn layout_to_svg(
    packing: &PackingResult,
    footprint: &PatternFootprint,
    margins: &PrintMargins,
    options: SvgDrawOptions,
    title: &str,
) -> Document {
    let sheet = packing.sheet;
    let sheet_bbox = sheet.bbox();
    let theme = &options.theme;

    let (vb_w, vb_h) = (sheet.width * 1.10, sheet.height * 1.10);
    let vbox = (
        -0.05 * sheet.width,
        -0.05 * sheet.height,
        vb_w,
        vb_h,
    );

    let stroke_width = f64::min(vb_w, vb_h) * 0.001 * theme.stroke_width_multiplier;

    //flip the y-axis, placements have their origin in the bottom-left corner
    let to_sheet_coords = format!("translate(0 {}) scale(1 -1)", sheet.height);

    let label = {
        let orientation = match packing.orientation {
            SheetOrientation::AsGiven => "",
            SheetOrientation::Swapped => " (turned 90°)",
        };
        let label_content = format!(
            "{} pcs ({} rotated) | sheet: {:.2} x {:.2}{} | efficiency: {:.1}% | {}",
            packing.n_pieces(),
            packing.n_rotated(),
            sheet.width,
            sheet.height,
            orientation,
            packing.efficiency() * 100.0,
            title,
        );
        let font_size = f64::min(sheet.width, sheet.height) * 0.025;
        Text::new(label_content)
            .set("x", 0.0)
            .set("y", -0.5 * font_size)
            .set("font-size", font_size)
            .set("font-family", "monospace")
            .set("font-weight", "500")
    };

    let sheet_group = Group::new()
        .set("id", "sheet")
        .add(svg_util::data_to_path(
            svg_util::rect_data(sheet_bbox),
            &[
                ("fill", &*format!("{}", theme.sheet_fill)),
                ("stroke", "black"),
                ("stroke-width", &*format!("{}", 3.0 * stroke_width)),
            ],
        ))
        .add(Title::new(format!(
            "sheet, width: {:.3}, height: {:.3}",
            sheet.width, sheet.height
        )));

    //a tile and its net pattern are defined once per rotation, every placement refers to them
    let tile_def = |id: &str, rotated: bool| -> Group {
        let (w, h) = match rotated {
            false => (footprint.gross_width, footprint.gross_height),
            true => (footprint.gross_height, footprint.gross_width),
        };
        let mut group = Group::new().set("id", id.to_owned()).add(svg_util::data_to_path(
            svg_util::rect_data(Rect {
                x_min: 0.0,
                y_min: 0.0,
                x_max: w,
                y_max: h,
            }),
            &[
                ("fill", &*format!("{}", theme.tile_fill)),
                ("fill-opacity", "0.5"),
                (
                    "stroke",
                    &*format!("{}", svg_util::change_brightness(theme.tile_fill, 0.5)),
                ),
                ("stroke-width", &*format!("{stroke_width}")),
                (
                    "stroke-dasharray",
                    &*format!("{} {}", 4.0 * stroke_width, 2.0 * stroke_width),
                ),
            ],
        ));
        if options.net_pattern {
            let (dx, dy, net_w, net_h, fill) = match rotated {
                false => (
                    margins.left,
                    margins.bottom,
                    footprint.net_width,
                    footprint.net_height,
                    theme.pattern_fill,
                ),
                true => (
                    margins.bottom,
                    margins.left,
                    footprint.net_height,
                    footprint.net_width,
                    theme.rotated_pattern_fill,
                ),
            };
            group = group.add(svg_util::data_to_path(
                svg_util::rect_data(Rect {
                    x_min: dx,
                    y_min: dy,
                    x_max: dx + net_w,
                    y_max: dy + net_h,
                }),
                &[
                    ("fill", &*format!("{fill}")),
                    ("fill-opacity", "0.7"),
                    ("stroke", &*format!("{}", theme.pattern_stroke)),
                    ("stroke-width", &*format!("{stroke_width}")),
                ],
            ));
        }
        group
    };

    let defs = Definitions::new()
        .add(tile_def("tile", false))
        .add(tile_def("tile_rotated", true));

    let tiles_group = packing.placements.iter().enumerate().fold(
        Group::new().set("id", "tiles"),
        |group, (i, p)| {
            let href = match p.rotated {
                false => "#tile",
                true => "#tile_rotated",
            };
            let title = Title::new(format!(
                "tile {i}, x: {:.3}, y: {:.3}, rotated: {}",
                p.x, p.y, p.rotated
            ));
            group.add(
                Use::new()
                    .set("transform", format!("translate({} {})", p.x, p.y))
                    .set("xlink:href", href)
                    .add(title),
            )
        },
    );

    let layout_group = Group::new()
        .set("transform", to_sheet_coords)
        .add(sheet_group)
        .add(tiles_group);

    let document = Document::new()
        .set("viewBox", vbox)
        .set("xmlns:xlink", "http://www.w3.org/1999/xlink")
        .add(defs)
        .add(layout_group);

    match options.label {
        true => document.add(label),
        false => document,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::{Allowances, BagDimensions, MasterSheet};
    use crate::packing::pack_plano;

    #[test]
    fn every_placement_is_drawn() {
        let margins = PrintMargins {
            top: 1.0,
            bottom: 1.0,
            left: 1.5,
            right: 1.5,
        };
        let footprint = PatternFootprint::derive(
            &BagDimensions {
                length: 10.0,
                width: 7.5,
                height: 16.0,
            },
            &Allowances {
                glue_tab: 2.0,
                top_fold: 2.0,
            },
            &margins,
        );
        let sheet = MasterSheet::try_new(109.0, 79.0).unwrap();
        // 40 x 25 tiles: a 2 x 3 grid and one rotated tile in the 29 wide leftover strip
        let packing = pack_plano(&sheet, footprint.gross_width, footprint.gross_height).unwrap();
        assert_eq!(packing.n_pieces(), 7);
        assert_eq!(packing.n_rotated(), 1);

        let svg = layout_to_svg(&packing, &footprint, &margins, SvgDrawOptions::default(), "test")
            .to_string();
        assert_eq!(svg.matches("href=\"#tile\"").count(), packing.n_pieces() - packing.n_rotated());
        assert_eq!(svg.matches("href=\"#tile_rotated\"").count(), packing.n_rotated());
        assert!(svg.contains(&format!("{} pcs", packing.n_pieces())));
        assert!(svg.contains("#87CEEB"));
    }
}
