use manifold_ledger::CertificateLedger;
use serde_json::json;

pub struct Args {
    pub intent: String,
    pub creator: String,
    pub stake: f64,
    pub goal: f64,
    pub backers: usize,
    pub amount: f64,
    pub complete: bool,
    pub fail: bool,
    pub yield_amount: f64,
    pub json: bool,
}

pub fn run(args: Args) {
    let mut ledger = CertificateLedger::new();
    let id = ledger.create_certificate(&args.creator, &args.intent, args.stake, args.goal, 0.0);

    for i in 0..args.backers {
        ledger.back_certificate(&id, &format!("backer_{i}"), args.amount);
    }

    if args.complete {
        ledger.complete_certificate(&id, true, args.yield_amount);
    } else if args.fail {
        ledger.complete_certificate(&id, false, 0.0);
    }

    let certificate = ledger
        .certificate(&id)
        .expect("certificate created this run")
        .clone();
    let reputation = ledger.creator_reputation(&args.creator);

    if args.json {
        let payload = json!({
            "certificate": certificate,
            "creator_reputation": reputation,
            "events": ledger.events(),
        });
        match serde_json::to_string_pretty(&payload) {
            Ok(text) => println!("{text}"),
            Err(e) => {
                eprintln!("error: failed to serialize output: {e}");
                std::process::exit(1);
            }
        }
    } else {
        println!("manifold certify {:?}", args.intent);
        println!("  Certificate: {}", certificate.id);
        println!("  Status: {:?}", certificate.status);
        println!("  Backers: {}", certificate.backer_count());
        println!("  Creator reputation: {reputation}");
        for event in ledger.events() {
            match serde_json::to_string(event) {
                Ok(line) => println!("{line}"),
                Err(e) => eprintln!("error: failed to serialize event: {e}"),
            }
        }
    }
}
