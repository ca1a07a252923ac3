use std::fs::File;
use std::path::Path;

use swatchbook::error::{ColorFormatError, IngestionError, SkipReason};
use swatchbook::{
    convert_color, filter, generate_scheme, query, search, similar, Catalog, CatalogStats,
    Category, ColorFormat, ColorRecord, FilterSet, Rgb, SchemeType, SearchConfig, SearchQuery,
    SimilarityConfig, SkippedRecord, SortField, SortOrder, SortSpec,
};

fn load() -> Result<Catalog, IngestionError> {
    let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/data/catalog.json");
    let ingestion = Catalog::from_reader(File::open(path)?)?;

    assert_eq!(
        ingestion.skipped,
        vec![
            SkippedRecord {
                index: 10,
                reason: SkipReason::MalformedHex(ColorFormatError::UnexpectedCharacters),
            },
            SkippedRecord {
                index: 11,
                reason: SkipReason::DuplicateHex("#FF0000".to_owned()),
            },
        ]
    );
    Ok(ingestion.catalog)
}

fn hexes(view: &[&ColorRecord]) -> Vec<String> {
    view.iter().map(|r| r.hex().to_owned()).collect()
}

#[test]
fn test_ingestion() -> Result<(), IngestionError> {
    let catalog = load()?;
    assert_eq!(catalog.len(), 10);
    assert_eq!(catalog.records()[0].chinese(), "红");

    let gray = catalog.get("#808080");
    assert_eq!(gray.map(|r| r.chinese()), Some("未命名"));
    assert_eq!(gray.map(|r| r.english()), Some("Unnamed"));
    assert_eq!(gray.map(|r| r.category()), Some(Category::Gray));

    assert_eq!(
        catalog.categories(),
        vec![
            Category::Red,
            Category::Yellow,
            Category::Blue,
            Category::Pink,
            Category::Gray,
            Category::BlackWhite,
            Category::Brown,
        ]
    );
    assert_eq!(catalog.tags().len(), 7);

    assert!(matches!(
        Catalog::from_json_str("{ \"colors\": "),
        Err(IngestionError::Syntax(_))
    ));
    assert!(matches!(
        Catalog::from_json_str("[]"),
        Err(IngestionError::Shape(_))
    ));
    Ok(())
}

#[test]
fn test_filter_intersection() -> Result<(), IngestionError> {
    let catalog = load()?;
    let filters = FilterSet::new()
        .with_category(Category::Red)
        .with_tag("经典");

    // The filter stage preserves catalog order
    let view = filter(catalog.view(), &filters);
    assert_eq!(hexes(&view), vec!["#FF0000", "#B22222"]);

    // The full pipeline sorts by pinyin
    let view = query(&catalog, &SearchQuery::default(), &filters, SortSpec::default());
    assert_eq!(hexes(&view), vec!["#B22222", "#FF0000"]);
    Ok(())
}

#[test]
fn test_guofeng_sentinel() -> Result<(), IngestionError> {
    let catalog = load()?;
    let filters = FilterSet::new().with_guofeng_only();

    let view = filter(catalog.view(), &filters);
    assert_eq!(hexes(&view), vec!["#FF0000", "#1661AB", "#B22222"]);
    assert_eq!(
        catalog.stats(&view),
        CatalogStats {
            total: 10,
            filtered: 3,
            with_guofeng: 3,
        }
    );
    Ok(())
}

#[test]
fn test_collation() -> Result<(), IngestionError> {
    let catalog = load()?;
    let names = |spec: SortSpec| -> Vec<String> {
        query(&catalog, &SearchQuery::default(), &FilterSet::default(), spec)
            .iter()
            .map(|r| r.chinese().to_owned())
            .collect()
    };

    assert_eq!(
        names(SortSpec::default()),
        vec!["阿胶红", "白", "靛青", "粉", "黑", "红", "金", "玉红", "棕", "未命名"]
    );
    assert_eq!(
        names(SortSpec::default().toggled()),
        vec!["棕", "玉红", "金", "红", "黑", "粉", "靛青", "白", "阿胶红", "未命名"]
    );
    Ok(())
}

#[test]
fn test_sort_stability() -> Result<(), IngestionError> {
    let catalog = load()?;
    let ascending = query(
        &catalog,
        &SearchQuery::default(),
        &FilterSet::default(),
        SortSpec::new(SortField::Hue, SortOrder::Asc),
    );
    let descending = query(
        &catalog,
        &SearchQuery::default(),
        &FilterSet::default(),
        SortSpec::new(SortField::Hue, SortOrder::Desc),
    );

    let hues: Vec<u16> = ascending.iter().map(|r| r.hsl().h()).collect();
    assert!(hues.windows(2).all(|w| w[0] <= w[1]), "hues should ascend");

    // Hue 0 records keep catalog order in both directions
    let zero_hue = |view: &[&ColorRecord]| -> Vec<String> {
        view.iter()
            .filter(|r| r.hsl().h() == 0)
            .map(|r| r.hex().to_owned())
            .collect()
    };
    assert_eq!(zero_hue(&ascending), zero_hue(&descending));
    assert_eq!(
        zero_hue(&ascending),
        vec!["#FF0000", "#FFFFFF", "#000000", "#B22222", "#808080"]
    );
    Ok(())
}

#[test]
fn test_search() -> Result<(), IngestionError> {
    let catalog = load()?;
    let config = SearchConfig::default();

    let view = search(catalog.view(), &SearchQuery::new("Red"), &config);
    assert_eq!(hexes(&view), vec!["#FF0000", "#C04851", "#B22222"]);

    let view = search(catalog.view(), &SearchQuery::new("indgo"), &config);
    assert_eq!(hexes(&view), vec!["#1661AB"]);

    let view = search(catalog.view(), &SearchQuery::new("13-0859"), &config);
    assert_eq!(hexes(&view), vec!["#FFD700"]);

    let view = search(catalog.view(), &SearchQuery::new("时尚"), &config);
    assert_eq!(hexes(&view), vec!["#F9A8C9", "#8B4513"]);
    Ok(())
}

#[test]
fn test_similarity() -> Result<(), IngestionError> {
    let catalog = load()?;
    let config = SimilarityConfig::default();

    let red = catalog.get("#FF0000").expect("catalog should contain red");
    let ranking = similar(red, &catalog, &config);
    let ranked: Vec<_> = ranking.iter().map(|s| s.record.hex()).collect();
    assert_eq!(
        ranked,
        vec!["#B22222", "#C04851", "#808080", "#F9A8C9", "#8B4513", "#FFFFFF"]
    );
    assert!(ranking.windows(2).all(|w| w[0].score >= w[1].score), "scores should descend");
    assert!(ranking.iter().all(|s| s.score >= 60.0), "scores should clear the cutoff");

    // Scores are symmetric
    for candidate in &ranking {
        let everything = SimilarityConfig {
            limit: catalog.len(),
            threshold: 0.0,
            ..SimilarityConfig::default()
        };
        let reverse = similar(candidate.record, &catalog, &everything);
        let back = reverse.iter().find(|s| s.record.hex() == "#FF0000");
        assert_eq!(back.map(|s| s.score), Some(candidate.score));
    }
    Ok(())
}

#[test]
fn test_schemes() -> Result<(), ColorFormatError> {
    let red: Rgb = "#ff0000".parse()?;

    let complementary = SchemeType::Complementary.generate(red);
    assert_eq!(complementary.len(), 1);
    assert_eq!(complementary[0].color().to_string(), "#00FFFF");
    assert_eq!(SchemeType::Tetradic.generate(red).len(), 3);

    assert!(generate_scheme(red, "monochromatic").is_ok(), "monochromatic is a scheme");
    assert!(generate_scheme(red, "rainbow").is_err(), "rainbow is not a scheme");

    assert_eq!("#GG0000".parse::<Rgb>(), Err(ColorFormatError::MalformedHex));
    assert_eq!(convert_color("#1661AB", ColorFormat::Rgb)?, "rgb(22, 97, 171)");

    // CIE L*a*b*, not Oklab
    let lab = convert_color("#FF0000", "lab".parse()?)?;
    assert!(
        lab.starts_with("lab(53.237"),
        "red should have lightness 53.24 but is {}",
        lab
    );
    Ok(())
}
