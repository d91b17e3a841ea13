mod args;

use args::{Args, Command, HistogramArgs, PointsArgs};
use sample_graphs::implementation::present::bin_table::format_bin_table;
use sample_graphs::prelude::*;
use std::process::ExitCode;
use tracing::info;

fn main() -> ExitCode {
    let args: Args = argh::from_env();

    // stdout carries only the summary
    tracing_subscriber::fmt()
        .with_max_level(args.log_level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    match execute(args.command) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error [{}]: {err}", err.stage());
            ExitCode::FAILURE
        }
    }
}

fn execute(command: Command) -> Result<(), GraphError> {
    let (request, presenter, options) = match command {
        Command::Histogram(args) => histogram_request(args),
        Command::Points(args) => points_request(args),
    };

    info!(
        input = %request.input.display(),
        output = %request.output.display(),
        "drawing chart"
    );
    let report = run(&request, &presenter)?;
    println!("{}", report.summary());

    if options.table {
        if let GraphReport::Histogram { histogram, .. } = &report {
            println!();
            println!("{}", format_bin_table(histogram, Some("Bins")));
        }
    }

    if let Some(path) = &options.report {
        write_report(&report, path)?;
        info!(path = %path.display(), "report written");
    }

    Ok(())
}

/// Output options shared by both subcommands.
struct OutputOptions {
    table: bool,
    report: Option<std::path::PathBuf>,
}

fn histogram_request(args: HistogramArgs) -> (GraphRequest, BitmapPresenter, OutputOptions) {
    let mut settings = HistogramSettings::new(args.layout);
    if args.auto_ceiling {
        settings.y_ceiling = YCeiling::MaxObserved;
    } else if let Some(ceiling) = args.y_ceiling {
        settings.y_ceiling = YCeiling::Fixed(ceiling);
    }
    settings.x_right = args.x_max;

    let presenter = BitmapPresenter::new(PresenterSettings {
        width: args.width,
        height: args.height,
    });

    (
        GraphRequest {
            input: args.input,
            output: args.output,
            kind: GraphKind::Histogram(settings),
        },
        presenter,
        OutputOptions {
            table: args.table,
            report: args.report,
        },
    )
}

fn points_request(args: PointsArgs) -> (GraphRequest, BitmapPresenter, OutputOptions) {
    let mut settings = PointSettings::new(args.padding);
    if let Some(fraction) = args.padding_fraction {
        settings.padding_fraction = fraction;
    }
    if let Some(min_span) = args.min_span {
        settings.min_span = min_span;
    }

    let presenter = BitmapPresenter::new(PresenterSettings {
        width: args.width,
        height: args.height,
    });

    (
        GraphRequest {
            input: args.input,
            output: args.output,
            kind: GraphKind::Points(settings),
        },
        presenter,
        OutputOptions {
            table: false,
            report: args.report,
        },
    )
}
