//! Ply Homogenization Example - Glass / Epoxy Ply

use ply_homogenization::prelude::*;

fn main() -> anyhow::Result<()> {
    env_logger::init();

    println!("=== Ply Homogenization Example: E-glass / Epoxy ===\n");

    // Epoxy matrix:  El = 3450 MPa, Glt = 1300 MPa, nu = 0.4, rho = 1200 kg/m³
    // E-glass fiber: El = Et = 72000 MPa, Glt = 29508 MPa, nu = 0.22, 300 g/m²
    let input = PlyInput::new(Constituent::epoxy(), Constituent::e_glass(), 50.0)
        .with_balance(FabricBalance::balanced());
    let ply = Ply::new(input)?;

    let k = ply.bulk_moduli();
    println!("Volume fractions: Vf = {}, Vm = {}", ply.vf(), ply.vm());
    println!(
        "Bulk moduli: matrix = {:.1} MPa, reinforcement = {:.1} MPa\n",
        k.matrix, k.reinforcement
    );

    let fractions = ply.mass_fractions()?;
    let masses = ply.masses(1.0)?.rounded();
    println!("Density:          {:.1} kg/m³", ply.density());
    println!("Thickness:        {:.3} mm", ply.thickness()?);
    println!(
        "Mass fractions:   fiber {:.3}, resin {:.3} (impregnation {:.3})",
        fractions.mf, fractions.mm, fractions.impregnation_ratio
    );
    println!("Masses per m²:    fiber {} g, resin {} g\n", masses.fiber, masses.resin);

    let ud = ply.self_consistent().rounded();
    println!("Unidirectional (self-consistent):");
    println!(
        "  El={} Et={} Glt={} Gtt={} MPa, Nult={} Nutl={} Nutt={}",
        ud.el, ud.et, ud.glt, ud.gtt, ud.nult, ud.nutl, ud.nutt
    );

    let mat = ply.mat_properties()?.rounded();
    println!("Mat:\n  E={} G={} MPa, Nu={}", mat.e, mat.g, mat.nu);

    let fabric = ply.fabric_properties()?.rounded();
    println!(
        "Fabric:\n  El={} Et={} Glt={} MPa, Nult={}\n",
        fabric.el, fabric.et, fabric.glt, fabric.nult
    );

    println!("=== Off-axis constants ===\n");
    let sweep = angle_sweep(&ply, &SweepOptions::default())?;
    for angle in [-90, -45, 0, 30, 45, 60] {
        if let Some(c) = sweep.at_angle(angle) {
            println!(
                "  {:>4}°: Ex={:.1} Ey={:.1} Gxy={:.1} Nuxy={:.3}",
                c.angle, c.ex, c.ey, c.gxy, c.nuxy
            );
        }
    }

    println!("\n=== Example Complete ===");
    Ok(())
}
