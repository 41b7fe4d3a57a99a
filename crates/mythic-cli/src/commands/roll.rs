use std::io;

use mythic_core::GameDb;
use mythic_oracle::{
    ChartRollRequest, FateChart, FateRollRequest, OracleError, RollOutcome, Session,
};

use super::{FateArgs, RollArgs, RollSubcommand};

pub fn run(db: &mut GameDb, args: RollArgs) -> Result<(), String> {
    if let Some(RollSubcommand::Rollfate(fate)) = args.fate {
        return run_fate(db, fate);
    }

    let request = ChartRollRequest {
        message: args.message.join(" "),
        chaos: args.chaos,
        odds: args.odds,
    };
    let game = db.active_game().cloned();
    let mut session = Session::new(db, game);
    let outcome = session.roll_on_chart(&request, &FateChart, &mut rand::rng(), &mut io::stdout());

    match outcome {
        Ok(RollOutcome::Rolled(_)) => Ok(()),
        Ok(RollOutcome::ListRequested) => {
            super::print_odds_table();
            Ok(())
        }
        Err(e @ OracleError::AmbiguousOdds { .. }) => Err(super::odds_error(e)),
        Err(e) => Err(e.to_string()),
    }
}

pub fn run_fate(db: &mut GameDb, args: FateArgs) -> Result<(), String> {
    let request = FateRollRequest {
        message: args.message.join(" "),
        skill: args.skill,
        difficulty: args.difficulty,
        opposed: args.opposed,
    };
    let game = db.active_game().cloned();
    let mut session = Session::new(db, game);
    session
        .roll_fate_dice(&request, &mut rand::rng(), &mut io::stdout())
        .map(|_| ())
        .map_err(|e| e.to_string())
}
