//! Tests for description parsing against the built-in palettes.

use describe::{DescriptionParser, Grammar, palettes, parse_ipt, parse_oklab, parse_rgb};
use packed::{Ipt, Oklab, PackedColor, Rgb, ipt, oklab};
use proptest::prelude::*;

// ============================================================================
// Degenerate input
// ============================================================================

#[test]
fn empty_is_transparent() {
    for text in ["", "   ", ",,;-", "^^"] {
        assert_eq!(parse_rgb(text), Rgb::TRANSPARENT, "{text:?}");
        assert_eq!(parse_oklab(text), Oklab::TRANSPARENT, "{text:?}");
        assert_eq!(parse_ipt(text), Ipt::TRANSPARENT, "{text:?}");
    }
}

#[test]
fn unknown_name_is_transparent() {
    assert_eq!(parse_rgb("xyzzy"), Rgb::TRANSPARENT);
    assert_eq!(parse_rgb("Red"), Rgb::TRANSPARENT);
    assert_eq!(parse_oklab("plugh"), Oklab::TRANSPARENT);
}

#[test]
fn adjectives_without_names_are_transparent() {
    assert_eq!(parse_rgb("darker rich"), Rgb::TRANSPARENT);
    assert_eq!(parse_oklab("light"), Oklab::TRANSPARENT);
}

#[test]
fn adjusted_unknown_name_stays_transparent() {
    assert_eq!(parse_rgb("lightest xyzzy"), Rgb::TRANSPARENT);
}

// ============================================================================
// Names and mixing
// ============================================================================

#[test]
fn single_names_are_stored_colors() {
    assert_eq!(parse_rgb("red").bits(), 0xFE00_00FF);
    assert_eq!(parse_oklab("gray"), palettes::oklab().lookup("gray"));
    assert_eq!(parse_oklab("red"), palettes::oklab().lookup("red").limit_to_gamut());
    assert_eq!(parse_ipt("red"), Ipt::from(Rgb::from_bits(0xFE00_00FF)).limit_to_gamut());
}

#[test]
fn even_mix() {
    assert_eq!(parse_rgb("red blue").bits(), 0xFE7F_007F);
    assert_eq!(parse_rgb("red, blue"), parse_rgb("red blue"));
}

#[test]
fn weighted_mix() {
    assert_eq!(parse_rgb("red^3 blue").bits(), 0xFE3F_00BF);
    assert_eq!(parse_rgb("red 3 blue"), parse_rgb("red^3 blue"));
    assert_eq!(parse_rgb("red 0.5 blue"), parse_rgb("red blue 2"));
}

#[test]
fn weight_before_any_name_is_ignored() {
    assert_eq!(parse_rgb("3 red"), parse_rgb("red"));
    assert_eq!(parse_rgb("2 red blue"), parse_rgb("red blue"));
}

#[test]
fn unparsable_weight_counts_as_one() {
    assert_eq!(parse_rgb("red 2_5 blue"), parse_rgb("red blue"));
}

#[test]
fn unknown_name_thins_the_mix() {
    assert_eq!(parse_rgb("red xyzzy").bits(), 0x7E00_007F);
}

#[test]
fn aliases() {
    assert_eq!(parse_rgb("grey"), parse_rgb("gray"));
    assert_eq!(parse_oklab("sapphire"), parse_oklab("cobalt"));
}

// ============================================================================
// Adjectives
// ============================================================================

#[test]
fn rgb_lightness_ladder() {
    let ladder: Vec<u32> = ["darkest", "dark", "", "light", "lighter"]
        .iter()
        .map(|adj| parse_rgb(&format!("{adj} gray")).bits())
        .collect();
    assert_eq!(
        ladder,
        vec![0xFE33_3333, 0xFE66_6666, 0xFE80_8080, 0xFE99_9999, 0xFEB2_B2B2]
    );
}

#[test]
fn oklab_lightness_ladder() {
    assert_eq!(parse_oklab("gray").bits(), 0xFE7F_80A1);
    assert_eq!(parse_oklab("light gray").bits(), 0xFE7F_80AC);
    assert_eq!(parse_oklab("dark gray").bits(), 0xFE7F_808C);
}

#[test]
fn red_lightness_ladder_climbs() {
    let levels = ["light", "lighter", "lightest", "lightmost"];
    let rgb: Vec<f32> = levels
        .iter()
        .map(|adj| parse_rgb(&format!("{adj} red")).lightness())
        .collect();
    assert!(rgb.windows(2).all(|w| w[0] < w[1]), "{rgb:?}");
    assert!(parse_rgb("red").lightness() < rgb[0]);

    let lab: Vec<f32> = levels
        .iter()
        .map(|adj| parse_oklab(&format!("{adj} red")).l())
        .collect();
    assert!(lab.windows(2).all(|w| w[0] < w[1]), "{lab:?}");
    assert!(parse_oklab("red").l() < lab[0]);
}

#[test]
fn adjective_first_letter_ignores_case() {
    assert_eq!(parse_rgb("Dark red"), parse_rgb("dark red"));
    assert_eq!(parse_rgb("LIGHT red"), parse_rgb("light red"));
}

#[test]
fn basic_grammar_case_and_lengths() {
    assert_eq!(parse_oklab("Dark sage"), parse_oklab("dark sage"));
    assert_eq!(parse_oklab("Sage"), Oklab::TRANSPARENT);
    // no level is six letters long, so "lights" is looked up as a name
    assert_eq!(parse_oklab("lights sage").to_bits() >> 24, 0x7E);
}

#[test]
fn compounds_match_their_parts() {
    assert_eq!(parse_rgb("bright red"), parse_rgb("light rich red"));
    assert_eq!(parse_rgb("weaker sage"), parse_rgb("darker duller sage"));
}

#[test]
fn adjective_position_does_not_matter() {
    assert_eq!(parse_rgb("red blue dark"), parse_rgb("dark red blue"));
}

#[test]
fn opposite_adjectives_cancel() {
    assert_eq!(parse_rgb("light dark mint"), parse_rgb("mint"));
}

#[test]
fn basic_grammar_has_no_compounds() {
    // "bright" is an unknown name there, mixed in as transparent
    let c = parse_oklab("bright red");
    assert_eq!(c.to_bits() >> 24, 0x7E);
}

#[test]
fn darker_is_darker() {
    assert!(parse_ipt("dark red").intensity() < parse_ipt("red").intensity());
    assert!(parse_oklab("dark sage").l() < parse_oklab("sage").l());
}

#[test]
fn duller_is_less_chromatic() {
    assert!(parse_oklab("dull sage").chroma() < parse_oklab("sage").chroma());
}

// ============================================================================
// Sub-ranges and custom tables
// ============================================================================

#[test]
fn parse_range() {
    let parser = DescriptionParser::new(palettes::rgb(), Grammar::extended());
    let text = "the red blue";
    assert_eq!(parser.parse_range(text, 4, Some(3)), parse_rgb("red"));
    assert_eq!(parser.parse_range(text, 4, None), parse_rgb("red blue"));
    assert_eq!(parser.parse_range(text, 100, None), Rgb::TRANSPARENT);
}

#[test]
fn custom_grammar_steps() {
    let grammar = Grammar::extended().with_steps(0.5, 0.2);
    let parser = DescriptionParser::new(palettes::rgb(), grammar);
    // 128 + 127 * 0.5
    assert_eq!(parser.parse("light gray").bits(), 0xFEBF_BFBF);
}

// ============================================================================
// Properties
// ============================================================================

fn description() -> impl Strategy<Value = String> {
    let words = prop::sample::select(vec![
        "red", "sage", "mint", "navy", "white", "black", "plum", "dark", "darkest", "light",
        "lightmost", "rich", "richmost", "dull", "bright", "pale", "deep", "weak", "2", "0.5",
        "xyzzy",
    ]);
    prop::collection::vec(words, 0..6).prop_map(|words| words.join(" "))
}

fn in_unit_cube(linear: [f32; 3]) -> bool {
    linear.iter().all(|c| (-1e-3..=1.0 + 1e-3).contains(c))
}

proptest! {
    #[test]
    fn any_text_parses(text in ".*") {
        let _ = parse_rgb(&text);
        let _ = parse_oklab(&text);
        let _ = parse_ipt(&text);
    }

    #[test]
    fn perceptual_results_are_in_gamut(text in description()) {
        let lab = parse_oklab(&text);
        if !lab.is_transparent() {
            let linear = oklab::lab_to_linear(lab.l(), lab.a(), lab.b());
            prop_assert!(in_unit_cube(linear), "{:?}", linear);
        }
        let color = parse_ipt(&text);
        if !color.is_transparent() {
            let linear = ipt::ipt_to_linear(color.intensity(), color.protan(), color.tritan());
            prop_assert!(in_unit_cube(linear), "{:?}", linear);
        }
    }

    #[test]
    fn parse_range_never_panics(text in ".{0,20}", start in 0usize..30, len in prop::option::of(0usize..30)) {
        let parser = DescriptionParser::new(palettes::rgb(), Grammar::extended());
        let _ = parser.parse_range(&text, start, len);
    }
}
