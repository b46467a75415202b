use std::path::Path;

use anyhow::{Context, Result, bail};
use chrono::Local;
use serde_json::json;
use tracing::{info, info_span};

use survey_ingest::{find_study, load_source};
use survey_model::{DisplayMode, PresentationOptions, StudyDocument, ViewMode};
use survey_segments::{HeatmapPalette, StudyView};
use survey_studies::{StudyFilter, all_tags, filter_studies, parse_filter_date, visual_status};

use survey_cli::render::{projection_table, segment_table, study_list_table, tag_table};

use crate::cli::{DisplayModeArg, ShowArgs, SegmentsArgs, SourceArgs, StudiesArgs, ViewModeArg};

fn load(source: &SourceArgs) -> Result<Vec<StudyDocument>> {
    load_source(&source.source)
        .with_context(|| format!("load studies from {}", source.source.display()))
}

pub fn run_studies(args: &StudiesArgs) -> Result<()> {
    let studies = load(&args.source)?;
    let filter = study_filter(args)?;
    let matched = filter_studies(&studies, &filter);
    let today = Local::now().date_naive();

    if args.json {
        let rows: Vec<_> = matched
            .iter()
            .map(|study| {
                json!({
                    "id": study.id,
                    "title": study.title,
                    "status": visual_status(study, today),
                    "started": study.started,
                    "ended": study.ended,
                    "respondents": study.respondents,
                    "keywords": study.keywords,
                })
            })
            .collect();
        println!("{}", serde_json::to_string_pretty(&rows)?);
        return Ok(());
    }

    if matched.is_empty() {
        if filter.is_active() {
            println!("No studies match the current filters.");
        } else {
            println!("No studies found.");
        }
        return Ok(());
    }
    println!("{}", study_list_table(&matched, today));
    println!("{} of {} studies", matched.len(), studies.len());
    Ok(())
}

fn study_filter(args: &StudiesArgs) -> Result<StudyFilter> {
    let mut filter = StudyFilter::new().with_tags(args.tags.iter().cloned());
    if let Some(search) = &args.search {
        filter = filter.with_search(search.clone());
    }
    if let Some(from) = &args.from {
        filter = filter.with_from(parse_filter_date(from).context("--from")?);
    }
    if let Some(to) = &args.to {
        filter = filter.with_to(parse_filter_date(to).context("--to")?);
    }
    Ok(filter)
}

pub fn run_tags(args: &SourceArgs) -> Result<()> {
    let studies = load(args)?;
    let tags = all_tags(&studies);
    if tags.is_empty() {
        println!("No keywords found.");
    } else {
        println!("{}", tag_table(&tags));
    }
    Ok(())
}

pub fn run_segments(args: &SegmentsArgs) -> Result<()> {
    let studies = load(&args.source)?;
    let study = find_study(&studies, &args.study_id)?;
    let options = PresentationOptions::new().with_view_mode(view_mode(args.view));
    let view = StudyView::new(Some(study), &options);

    if args.json {
        println!("{}", serde_json::to_string_pretty(view.catalog())?);
        return Ok(());
    }

    println!("Study: {} ({})", study.title, study.id);
    println!("View: {}", view.view_mode().label());
    println!("Overall base size: {}", view.overall_base_size());
    if view.catalog().is_empty() {
        println!("No segments for this view mode.");
    } else {
        println!("{}", segment_table(&view));
    }
    Ok(())
}

pub fn run_show(args: &ShowArgs) -> Result<()> {
    let studies = load(&args.source)?;
    let study = find_study(&studies, &args.study_id)?;
    let span = info_span!("show", study_id = %study.id);
    let _guard = span.enter();

    let options = PresentationOptions::new()
        .with_view_mode(view_mode(args.view))
        .with_display_mode(display_mode(args.display));
    let mut view = StudyView::new(Some(study), &options);
    if let Some(path) = &args.palette {
        view = view.with_palette(load_palette(path)?);
    }
    if let Some(name) = &args.segment
        && !view.select_by_name(name)
    {
        let available: Vec<&str> = view.catalog().iter().map(|tab| tab.name.as_str()).collect();
        bail!(
            "segment '{name}' not found in {} view (available: {})",
            view.view_mode().label(),
            available.join(", ")
        );
    }
    let Some(active) = view.active_segment() else {
        bail!("study {} has no segments for this view mode", study.id);
    };
    info!(tab = %active.config.name, display = %view.display_mode(), "segment opened");

    let projections = view.render();
    if args.json {
        println!("{}", serde_json::to_string_pretty(&projections)?);
        return Ok(());
    }

    println!("Study: {} ({})", study.title, study.id);
    println!(
        "Segment: {} | View: {} | Base size: {}",
        active.config.name,
        view.view_mode().label(),
        view.overall_base_size()
    );
    if projections.is_empty() {
        println!("No questions in this segment.");
    }
    for projection in &projections {
        let (title, table) = projection_table(projection, view.missing_placeholder());
        println!();
        println!("{title}");
        println!("{table}");
    }
    Ok(())
}

fn load_palette(path: &Path) -> Result<HeatmapPalette> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("read palette {}", path.display()))?;
    serde_json::from_str(&text).with_context(|| format!("parse palette {}", path.display()))
}

fn view_mode(arg: ViewModeArg) -> ViewMode {
    match arg {
        ViewModeArg::BottomUp => ViewMode::BottomUp,
        ViewModeArg::TopDown => ViewMode::TopDown,
        ViewModeArg::ResponseTime => ViewMode::ResponseTime,
    }
}

fn display_mode(arg: DisplayModeArg) -> DisplayMode {
    match arg {
        DisplayModeArg::Table => DisplayMode::Table,
        DisplayModeArg::Chart => DisplayMode::Chart,
        DisplayModeArg::Heatmap => DisplayMode::Heatmap,
    }
}
