// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use clap::{Arg, ArgAction, Command, value_parser};

fn json_args(cmd: Command) -> Command {
    cmd.arg(
        Arg::new("json")
            .long("json")
            .action(ArgAction::SetTrue)
            .help("Print JSON"),
    )
    .arg(
        Arg::new("jsonl")
            .long("jsonl")
            .action(ArgAction::SetTrue)
            .conflicts_with("json")
            .help("Print one JSON object per line"),
    )
}

fn range_args(cmd: Command) -> Command {
    cmd.arg(
        Arg::new("type")
            .long("type")
            .value_name("income|expense"),
    )
    .arg(Arg::new("from").long("from").value_name("YYYY-MM-DD"))
    .arg(Arg::new("to").long("to").value_name("YYYY-MM-DD"))
}

/// Fields shared by `tx add` and `tx edit`.
fn transaction_fields(cmd: Command) -> Command {
    cmd.arg(Arg::new("date").long("date").required(true))
        .arg(
            Arg::new("amount")
                .long("amount")
                .required(true)
                .allow_negative_numbers(true),
        )
        .arg(Arg::new("category").long("category").required(true))
        .arg(Arg::new("payment-type").long("payment-type").required(true))
        .arg(Arg::new("comment").long("comment"))
        .arg(Arg::new("place").long("place"))
        .arg(Arg::new("beneficiary").long("beneficiary"))
        .arg(
            Arg::new("income")
                .long("income")
                .action(ArgAction::SetTrue)
                .help("Record as income instead of expense"),
        )
}

fn payment_type_fields(cmd: Command) -> Command {
    cmd.arg(Arg::new("bank").long("bank"))
        .arg(Arg::new("issuer").long("issuer"))
        .arg(Arg::new("issued").long("issued").value_name("YYYY-MM-DD"))
        .arg(Arg::new("expires").long("expires").value_name("YYYY-MM-DD"))
}

fn id_arg() -> Arg {
    Arg::new("id").required(true).value_parser(value_parser!(i64))
}

fn name_arg() -> Arg {
    Arg::new("name").required(true)
}

pub fn build_cli() -> Command {
    Command::new("budget-tracker")
        .about("Track income and expenses by category, payment type, place and beneficiary")
        .version(clap::crate_version!())
        .arg(
            Arg::new("db")
                .long("db")
                .global(true)
                .env("BUDGET_TRACKER_DB")
                .value_parser(value_parser!(std::path::PathBuf))
                .help("SQLite database file (defaults to the platform data dir)"),
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .global(true)
                .action(ArgAction::SetTrue)
                .help("Debug logging on stderr"),
        )
        .subcommand(Command::new("init").about("Create the database"))
        .subcommand(
            Command::new("tx")
                .about("Transactions")
                .subcommand(transaction_fields(Command::new("add").about("Record a transaction")))
                .subcommand(transaction_fields(
                    Command::new("edit")
                        .about("Replace every field of a transaction")
                        .arg(id_arg()),
                ))
                .subcommand(Command::new("rm").about("Delete a transaction").arg(id_arg()))
                .subcommand(json_args(
                    Command::new("show").about("Show one transaction").arg(id_arg()),
                ))
                .subcommand(json_args(range_args(
                    Command::new("list").about("List transactions").arg(
                        Arg::new("limit")
                            .long("limit")
                            .value_parser(value_parser!(usize)),
                    ),
                ))),
        )
        .subcommand(
            Command::new("category")
                .about("Categories")
                .subcommand(Command::new("add").arg(name_arg()))
                .subcommand(json_args(Command::new("list")))
                .subcommand(Command::new("rm").arg(name_arg())),
        )
        .subcommand(
            Command::new("payment-type")
                .about("Payment types (cards, accounts)")
                .subcommand(payment_type_fields(Command::new("add").arg(name_arg())))
                .subcommand(json_args(Command::new("list")))
                .subcommand(payment_type_fields(
                    Command::new("edit")
                        .about("Replace every field of a payment type")
                        .arg(name_arg())
                        .arg(Arg::new("rename").long("rename")),
                ))
                .subcommand(Command::new("rm").arg(name_arg())),
        )
        .subcommand(
            Command::new("place")
                .about("Places")
                .subcommand(Command::new("add").arg(name_arg()))
                .subcommand(json_args(Command::new("list"))),
        )
        .subcommand(
            Command::new("beneficiary")
                .about("Beneficiaries")
                .subcommand(Command::new("add").arg(name_arg()))
                .subcommand(json_args(Command::new("list")))
                .subcommand(
                    Command::new("suggest")
                        .about("Most frequent beneficiary for a category")
                        .arg(Arg::new("category").long("category").required(true)),
                ),
        )
        .subcommand(
            Command::new("report")
                .about("Breakdowns")
                .subcommand(json_args(range_args(
                    Command::new("by-category").about("Totals and shares per category"),
                )))
                .subcommand(json_args(range_args(
                    Command::new("by-payment-type").about("Totals and shares per payment type"),
                )))
                .subcommand(json_args(
                    Command::new("monthly")
                        .about("Income vs expense per month")
                        .arg(Arg::new("from").long("from").value_name("YYYY-MM-DD"))
                        .arg(Arg::new("to").long("to").value_name("YYYY-MM-DD")),
                )),
        )
        .subcommand(json_args(Command::new("stats").about("Ledger statistics")))
        .subcommand(
            Command::new("export").about("Export data").subcommand(
                Command::new("transactions")
                    .arg(Arg::new("out").long("out").required(true))
                    .arg(
                        Arg::new("format")
                            .long("format")
                            .default_value("csv")
                            .value_parser(["csv", "json"]),
                    ),
            ),
        )
}
