//! Tests for primitive SVG elements.

use super::*;

mod axis_tests {
    use super::*;

    #[test]
    fn horizontal_axis_renders() {
        let axis = Axis::horizontal(10.0, 100.0, 200.0).with_labels(vec![
            (0.0, "0".to_string()),
            (0.5, "24".to_string()),
            (1.0, "48".to_string()),
        ]);

        let svg = axis.render();
        assert!(svg.contains("<line"));
        assert!(svg.contains("<text"));
        assert!(svg.contains("text-anchor=\"middle\""));
        // Midpoint label sits at x + length / 2
        assert!(svg.contains("<text x=\"110\""));
    }

    #[test]
    fn vertical_axis_renders() {
        let axis = Axis::vertical(50.0, 150.0, 100.0)
            .with_labels(vec![(0.0, "25".to_string()), (1.0, "50".to_string())]);

        let svg = axis.render();
        assert!(svg.contains("<line"));
        assert!(svg.contains("text-anchor=\"end\""));
    }

    #[test]
    fn axis_with_custom_font_size() {
        let axis = Axis::horizontal(0.0, 0.0, 100.0)
            .with_font_size(14.0)
            .with_labels(vec![(0.5, "mid".to_string())]);

        let svg = axis.render();
        assert!(svg.contains("font-size=\"14\""));
    }

    #[test]
    fn hidden_line_and_zero_ticks_render_labels_only() {
        let axis = Axis::horizontal(0.0, 0.0, 100.0)
            .with_line(false)
            .with_tick_length(0.0)
            .with_labels(vec![(0.5, "mid".to_string())]);

        let svg = axis.render();
        assert!(!svg.contains("<line"));
        assert_eq!(svg.matches("<text").count(), 1);
    }

    #[test]
    fn tick_marks_drawn_when_length_positive() {
        let axis = Axis::horizontal(0.0, 0.0, 100.0)
            .with_tick_length(3.5)
            .with_labels(vec![(0.0, "a".to_string()), (1.0, "b".to_string())]);

        // Spine plus one tick per label
        assert_eq!(axis.render().matches("<line").count(), 3);
    }
}

mod bar_tests {
    use super::*;

    #[test]
    fn bar_renders_rect() {
        let bar = Bar::new(10.0, 20.0, 50.0, 80.0, ChartColor::named("cornflowerblue"));

        let svg = bar.render();
        assert!(svg.starts_with("<rect"));
        assert!(svg.contains("x=\"10\" y=\"20\" width=\"50\" height=\"80\""));
        assert!(svg.contains("fill=\"cornflowerblue\""));
        assert!(!svg.contains("fill-opacity"));
        assert!(!svg.contains("<title>"));
    }

    #[test]
    fn bar_with_opacity_and_stroke() {
        let bar = Bar::new(0.0, 0.0, 10.0, 10.0, ChartColor::hex("#34d399"))
            .with_opacity(0.6)
            .with_stroke(ChartColor::named("white"));

        let svg = bar.render();
        assert!(svg.contains("fill-opacity=\"0.6\""));
        assert!(svg.contains("stroke=\"white\""));
    }

    #[test]
    fn opaque_bar_omits_fill_opacity() {
        let svg = Bar::new(0.0, 0.0, 10.0, 10.0, ChartColor::hex("#000")).render();
        assert_eq!(
            svg,
            r##"<rect x="0" y="0" width="10" height="10" fill="#000"/>"##
        );
    }
}

mod line_tests {
    use super::*;

    #[test]
    fn line_renders_path() {
        let line = Line::new(
            vec![(0.0, 100.0), (50.0, 50.0), (100.0, 75.0)],
            ChartColor::hex("#3b82f6"),
        );

        let svg = line.render();
        assert!(svg.contains("<path"));
        assert!(svg.contains("M0,100 L50,50 L100,75"));
        assert!(svg.contains("stroke-width=\"2\""));
        assert!(!svg.contains("stroke-dasharray"));
    }

    #[test]
    fn line_with_custom_stroke_width() {
        let line = Line::new(vec![(0.0, 0.0), (100.0, 100.0)], ChartColor::hex("#000"))
            .with_stroke_width(2.5);

        let svg = line.render();
        assert!(svg.contains("stroke-width=\"2.5\""));
    }

    #[test]
    fn dashed_line() {
        let line = Line::new(vec![(0.0, 0.0), (10.0, 0.0)], ChartColor::hex("#6b7280"))
            .with_dash(vec![6.0, 3.0]);

        let svg = line.render();
        assert!(svg.contains("stroke-dasharray=\"6,3\""));
        assert!(svg.contains("stroke-linecap=\"butt\""));
    }

    #[test]
    fn solid_line_has_round_caps() {
        let svg = Line::new(vec![(0.0, 0.0), (10.0, 0.0)], ChartColor::hex("#000")).render();
        assert!(svg.contains("stroke-linecap=\"round\""));
    }

    #[test]
    fn path_coordinates_are_rounded() {
        let line = Line::new(vec![(1.23456, 9.87654)], ChartColor::hex("#000"));
        assert_eq!(line.path_data(), "M1.23,9.88");
    }

    #[test]
    fn empty_line_returns_empty_string() {
        let line = Line::new(vec![], ChartColor::hex("#000"));
        assert!(line.render().is_empty());
    }
}

mod text_tests {
    use super::*;

    #[test]
    fn single_line_text() {
        let text = Text::new(10.0, 20.0, "Time (hrs)")
            .with_anchor(TextAnchor::Middle)
            .with_font_size(12.0);

        let svg = text.render();
        assert_eq!(
            svg,
            r##"<text x="10" y="20" text-anchor="middle" fill="#262626" font-size="12">Time (hrs)</text>"##
        );
    }

    #[test]
    fn rotated_text_uses_transform() {
        let svg = Text::new(14.0, 90.0, "Snap Rate").rotated(-90.0).render();
        assert!(svg.contains("transform=\"rotate(-90 14 90)\""));
    }

    #[test]
    fn multi_line_text_uses_tspans() {
        let svg = Text::new(50.0, 40.0, "Biological\nEcholocation")
            .centered()
            .bold()
            .render();

        assert_eq!(svg.matches("<tspan").count(), 2);
        assert!(svg.contains("dy=\"-0.6em\">Biological</tspan>"));
        assert!(svg.contains("dy=\"1.2em\">Echolocation</tspan>"));
        assert!(svg.contains("font-weight=\"bold\""));
        assert!(svg.contains("dominant-baseline=\"central\""));
    }

    #[test]
    fn text_content_is_escaped() {
        let svg = Text::new(0.0, 0.0, "A & B").render();
        assert!(svg.contains(">A &amp; B</text>"));
    }
}
