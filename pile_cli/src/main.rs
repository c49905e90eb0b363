//! # Pile Capacity CLI
//!
//! Terminal front end for pile_core: builds a demo SPT profile, asks for the
//! pile geometry and settlement depth, and compares every registered
//! calculation method depth by depth.

use std::io::{self, BufRead, Write};

use pile_core::piles::{EstacaFactory, ProcessoConstrucao, TipoEstaca};
use pile_core::profile::PerfilSPT;
use pile_core::registry;

fn prompt_f64(prompt: &str, default: f64) -> f64 {
    print!("{}", prompt);
    if io::stdout().flush().is_err() {
        return default;
    }

    let mut input = String::new();
    if io::stdin().lock().read_line(&mut input).is_err() {
        return default;
    }

    input.trim().parse().unwrap_or(default)
}

fn perfil_demo() -> PerfilSPT {
    let mut perfil = PerfilSPT::new("SP-01");
    perfil
        .adicionar_medidas(vec![
            (1.0, 3, "argila arenosa"),
            (2.0, 3, "argila arenosa"),
            (3.0, 5, "argila arenosa"),
            (4.0, 6, "argila arenosa"),
            (5.0, 8, "argila arenosa"),
            (6.0, 13, "areia argilosa"),
            (7.0, 17, "areia argilosa"),
            (8.0, 25, "areia argilosa"),
            (9.0, 27, "areia silto argilosa"),
            (10.0, 32, "areia"),
            (11.0, 36, "areia"),
        ])
        .expect("demo profile is well formed");
    perfil
}

fn main() {
    println!("Pile Capacity CLI - SPT Empirical Methods");
    println!("=========================================");
    println!();
    println!("Demo sounding SP-01 (11 layers, 1..11 m)");
    println!();

    let diametro = prompt_f64("Pile diameter (m) [0.30]: ", 0.30);
    let cota = prompt_f64("Settlement depth (m) [5.0]: ", 5.0);
    println!();

    let perfil = perfil_demo();

    let estaca = match EstacaFactory::criar_circular(
        TipoEstaca::PreMoldada,
        ProcessoConstrucao::Deslocamento,
        diametro,
        cota,
    ) {
        Ok(estaca) => estaca,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };

    println!("Precast circular pile, D = {:.2} m, cota = {:.1} m", diametro, cota);
    println!();
    println!("═══════════════════════════════════════════════════════════════");
    println!("  {:<34} {:>8} {:>8} {:>9}", "METHOD", "Rp (kN)", "Rl (kN)", "Qadm (kN)");
    println!("═══════════════════════════════════════════════════════════════");

    let mut resultados = Vec::new();
    for id in registry::list_ids() {
        let info = registry::get(id).expect("listed ids are registered");
        let calc = registry::create_calculator(id).expect("listed ids are registered");
        match calc.calcular(&perfil, &estaca) {
            Ok(resultado) => {
                println!(
                    "  {:<34} {:>8.1} {:>8.1} {:>9.1}",
                    info.name,
                    resultado.resistencia_ponta,
                    resultado.resistencia_lateral,
                    resultado.capacidade_carga_adm
                );
                resultados.push((info.id, resultado));
            }
            Err(e) => {
                println!("  {:<34} {}", info.name, e);
            }
        }
    }
    println!("═══════════════════════════════════════════════════════════════");

    // Depth scan with the first method, up to the profile's stopping depth
    if let Ok(calc) = registry::create_calculator("aoki_velloso_1975") {
        if let Ok(parada) = calc.cota_parada(&perfil) {
            println!();
            println!("Aoki e Velloso (1975) depth scan (to stopping depth {:.0} m):", parada);
            println!("  {:>6} {:>10} {:>10} {:>11}", "cota", "Rp (kN)", "Rl (kN)", "Qadm (kN)");
            let mut cota_scan = 1.0;
            while cota_scan <= parada {
                let estaca_scan = EstacaFactory::criar_circular(
                    TipoEstaca::PreMoldada,
                    ProcessoConstrucao::Deslocamento,
                    diametro,
                    cota_scan,
                );
                if let Ok(estaca_scan) = estaca_scan {
                    if let Ok(r) = calc.calcular(&perfil, &estaca_scan) {
                        println!(
                            "  {:>6.1} {:>10.1} {:>10.1} {:>11.1}",
                            r.cota, r.resistencia_ponta, r.resistencia_lateral,
                            r.capacidade_carga_adm
                        );
                    }
                }
                cota_scan += 1.0;
            }
        }
    }

    println!();
    println!("JSON Output (for LLM/API use):");
    let json: Vec<serde_json::Value> = resultados
        .iter()
        .map(|(id, r)| {
            serde_json::json!({
                "metodo": id,
                "resultado": r,
            })
        })
        .collect();
    if let Ok(texto) = serde_json::to_string_pretty(&json) {
        println!("{}", texto);
    }
}
