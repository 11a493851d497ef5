use std::env;
use std::process::ExitCode;

use curvefit::configuration::Configuration;
use curvefit::fit::curvereport::CurveReport;
use curvefit::fit::fittask::FitTask;
use curvefit::logger;
use curvefit::math::linalg::designmatrix::coordinate_matrix;

const DEFAULT_TASKS: [&'static str; 2] = ["parabola", "cubic"];

fn print_report(task: &FitTask, report: &CurveReport) {
    println!("==== {} ====", report.task_name());
    if let Some(plane) = task.plane() {
        println!("Points on the plane:\n{}", coordinate_matrix(plane.points()));
    }

    println!("Chosen points:");
    for point in report.chosen().iter() {
        println!(" {}", point);
    }

    println!("\nStart matrix:{}", report.start_matrix());
    println!("Design matrix (degree {}):{}", task.degree(), report.design_matrix());
    match report.start_matrix_inverse() {
        Some(Ok(inverse)) => println!("Inverted start matrix:{}", inverse),
        Some(Err(error)) => eprintln!("Cannot invert start matrix: {}", error),
        None => {},
    }

    let polynomial = report.polynomial();
    let coefficients: Vec<String> = polynomial.coefs()
        .iter()
        .enumerate()
        .map(|(i, c)| format!("{}: {}", (b'a' + (i as u8 % 26)) as char, c))
        .collect();
    println!("Coefficients: {}", coefficients.join(", "));
    println!("Equation: {}", report.equation());

    println!("Calculated points on the curve:");
    for point in report.samples() {
        println!("{}", point);
    }
    println!();
}

fn main() -> ExitCode {
    if let Err(error) = logger::init() {
        eprintln!("logger already initialised: {}", error);
    }

    let mut args: Vec<String> = env::args().skip(1).collect();
    let config = if args.first().is_some_and(|arg| arg.ends_with(".json")) {
        let config_path = args.remove(0);
        let config = Configuration::new();
        if let Err(error) = config.from_reader(&config_path) {
            eprintln!("Error loading {}: {}", config_path, error);
            return ExitCode::FAILURE;
        }
        config
    } else {
        Configuration::builtin()
    };

    let task_names: Vec<String> = if !args.is_empty() {
        args
    } else if DEFAULT_TASKS.iter().all(|name| config.contains_task(name)) {
        DEFAULT_TASKS.iter().map(|name| name.to_string()).collect()
    } else {
        config.task_names()
    };

    for name in task_names {
        let task = match config.task(&name) {
            Ok(task) => task,
            Err(error) => {
                eprintln!("{}", error);
                continue;
            }
        };
        let report = match task.run() {
            Ok(report) => report,
            Err(error) => {
                eprintln!("Task '{}' failed: {}", name, error);
                continue;
            }
        };
        print_report(&task, &report);

        if let Err(error) = report.save() {
            eprintln!("Error opening {} for writing: {}", report.output_file(), error);
            return ExitCode::FAILURE;
        }
    }

    ExitCode::SUCCESS
}
