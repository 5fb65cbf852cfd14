use std::error::Error;
use std::path::PathBuf;

use argmax_nn::{logging, predict, train_network, TrainConfig};
use argmax_nn::train::train_config::{
    BATCH_SIZE, EPOCHS, LEARNING_RATE, MODEL_PATH, PLOT_PATH, TRAIN_SAMPLES,
};
use clap::builder::RangedU64ValueParser;
use clap::{Parser, Subcommand};

/// Learns which of five random numbers is the largest.
///
/// Without a subcommand, trains with the built-in settings.
#[derive(Parser)]
#[command(version, about)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Train a new model, save its weights and plot the training curve
    Train {
        #[arg(short, long, value_name = "INT", default_value_t = EPOCHS, value_parser = at_least_one())]
        epochs: usize,
        #[arg(short, long, value_name = "INT", default_value_t = BATCH_SIZE, value_parser = at_least_one())]
        batch_size: usize,
        #[arg(long, value_name = "INT", default_value_t = TRAIN_SAMPLES, value_parser = at_least_one())]
        train_samples: usize,
        #[arg(short, long, value_name = "FLOAT", default_value_t = LEARNING_RATE)]
        learning_rate: f64,
        /// Fix every random draw for a reproducible run
        #[arg(long)]
        seed: Option<u64>,
        #[arg(short, long, value_name = "PATH", default_value = MODEL_PATH)]
        model: PathBuf,
        #[arg(short, long, value_name = "PATH", default_value = PLOT_PATH)]
        plot: PathBuf,
    },
    /// Classify vectors with previously saved weights
    Predict {
        #[arg(short, long, value_name = "PATH", default_value = MODEL_PATH)]
        model: PathBuf,
        /// Comma-separated vector, e.g. 0.07,0.15,0.31,0.03,0.88; repeatable
        #[arg(short, long, value_name = "VECTOR", required = true, value_parser = parse_vector)]
        input: Vec<InputVector>,
        /// Print the predictions as a JSON array
        #[arg(long)]
        json: bool,
    },
}

fn at_least_one() -> RangedU64ValueParser<usize> {
    RangedU64ValueParser::<usize>::new().range(1..)
}

#[derive(Clone, Debug)]
struct InputVector(Vec<f64>);

fn parse_vector(s: &str) -> Result<InputVector, String> {
    s.split(',')
        .map(|part| {
            part.trim()
                .parse::<f64>()
                .map_err(|e| format!("invalid number {:?}: {}", part.trim(), e))
        })
        .collect::<Result<Vec<f64>, String>>()
        .map(InputVector)
}

fn run_training(config: TrainConfig) -> Result<(), Box<dyn Error>> {
    let outcome = train_network(&config)?;
    let pairs: Vec<[f64; 2]> = outcome.log.iter().map(|s| s.as_pair()).collect();
    println!("{:?}", pairs);
    Ok(())
}

fn main() -> Result<(), Box<dyn Error>> {
    logging::init_logging()?;
    let args = Cli::parse();

    match args.command {
        None => run_training(TrainConfig::default())?,
        Some(Command::Train {
            epochs,
            batch_size,
            train_samples,
            learning_rate,
            seed,
            model,
            plot,
        }) => {
            let config = TrainConfig {
                train_samples,
                seed,
                model_path: model,
                plot_path: Some(plot),
                ..TrainConfig::new(epochs, batch_size, learning_rate)
            };
            run_training(config)?;
        }
        Some(Command::Predict { model, input, json }) => {
            let inputs: Vec<Vec<f64>> = input.into_iter().map(|v| v.0).collect();
            let predictions = predict(&model, &inputs)?;
            if json {
                println!("{}", serde_json::to_string_pretty(&predictions)?);
            } else {
                for prediction in predictions {
                    println!("{}", prediction);
                }
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_comma_separated_vectors() {
        let v = parse_vector("0.07, 0.15,0.31,0.03 ,0.88").unwrap();
        assert_eq!(v.0, vec![0.07, 0.15, 0.31, 0.03, 0.88]);
        assert!(parse_vector("0.1,abc").is_err());
    }

    #[test]
    fn no_subcommand_means_default_training() {
        let cli = Cli::try_parse_from(["argmax-nn"]).unwrap();
        assert!(cli.command.is_none());
    }

    #[test]
    fn predict_collects_repeated_inputs() {
        let cli = Cli::try_parse_from([
            "argmax-nn", "predict", "--input", "1,2,3,4,5", "--input", "5,4,3,2,1",
        ])
        .unwrap();
        match cli.command {
            Some(Command::Predict { input, json, .. }) => {
                assert_eq!(input.len(), 2);
                assert!(!json);
            }
            _ => panic!("expected predict subcommand"),
        }
    }

    #[test]
    fn zero_counts_are_usage_errors() {
        for flag in ["--epochs", "--batch-size", "--train-samples"] {
            let err = Cli::try_parse_from(["argmax-nn", "train", flag, "0"])
                .err()
                .unwrap_or_else(|| panic!("{flag} 0 was accepted"));
            assert_eq!(err.kind(), clap::error::ErrorKind::ValueValidation, "{flag}");
        }
        assert!(Cli::try_parse_from(["argmax-nn", "train", "--batch-size", "1"]).is_ok());
    }

    #[test]
    fn predict_json_flag() {
        let cli = Cli::try_parse_from(["argmax-nn", "predict", "--json", "-i", "1,2,3,4,5"]).unwrap();
        assert!(matches!(cli.command, Some(Command::Predict { json: true, .. })));
    }
}
