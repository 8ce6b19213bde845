use approx::assert_relative_eq;
use ply_homogenization::io;
use ply_homogenization::prelude::*;

fn env_i32(name: &str, default_val: i32) -> i32 {
    std::env::var(name)
        .ok()
        .and_then(|v| v.parse::<i32>().ok())
        .filter(|&v| v > 0)
        .unwrap_or(default_val)
}

/// Epoxy / E-glass, 50% fiber volume, balanced fabric
fn glass_epoxy_columns() -> ColumnInput {
    ColumnInput {
        el: vec![3450.0, 72000.0],
        et: vec![0.0, 72000.0],
        glt: vec![1300.0, 29508.0],
        nult: vec![0.4, 0.22],
        rho: vec![1200.0, 2550.0],
        msf: vec![0.0, 300.0],
        n: vec![1.0, 1.0],
        vf: 50.0,
    }
}

#[test]
fn glass_epoxy_worked_example() {
    let ply = Ply::from_columns(&glass_epoxy_columns()).unwrap();

    assert_eq!(ply.vf(), 0.5);
    assert_eq!(ply.vm(), 0.5);

    let k = ply.bulk_moduli();
    assert_relative_eq!(
        k.reinforcement,
        72000.0 / (2.0 * (1.0 - 0.44) * 1.22),
        max_relative = 1e-12
    );

    let ud = ply.self_consistent();
    assert_eq!(ud.el, 0.5 * 72000.0 + 0.5 * 3450.0);
    assert_eq!(ud.el, 37725.0);

    let rounded = ud.rounded();
    assert_eq!(rounded.et, 9851.6);
    assert_eq!(rounded.glt, 3495.3);
    assert_eq!(rounded.gtt, 3213.7);
    assert_eq!(rounded.nult, 0.31);
    assert_eq!(rounded.nutl, 0.081);
    assert_eq!(rounded.nutt, 0.533);

    let mat = ply.mat_properties().unwrap().rounded();
    assert_eq!(mat.e, 20304.1);
    assert_eq!(mat.g, 7178.5);
    assert_eq!(mat.nu, 0.414);

    let fabric = ply.fabric_properties().unwrap().rounded();
    assert_eq!(fabric.el, 23788.3);
    assert_eq!(fabric.et, 23788.3);
    assert_eq!(fabric.glt, 3495.3);
    assert_eq!(fabric.nult, 0.128);

    let report = ply.report(1.0).unwrap();
    assert_relative_eq!(report.thickness, 0.2352941176470588, max_relative = 1e-12);
    assert_eq!(report.masses.rounded().resin, 141.2);
    assert_relative_eq!(
        report.mass_fractions.mf + report.mass_fractions.mm,
        1.0,
        epsilon = 1e-15
    );
}

#[test]
fn glass_epoxy_sweep_properties() {
    let ply = Ply::new(PlyInput::glass_epoxy()).unwrap();
    let ud = ply.self_consistent();
    let sweep = angle_sweep(&ply, &SweepOptions::default()).unwrap();

    assert_eq!(sweep.len(), 180);
    for series in [&sweep.ex, &sweep.ey, &sweep.gxy, &sweep.nuxy] {
        assert_eq!(series.len(), 180);
        assert!(series.iter().all(|v| v.is_finite()));
    }
    assert_relative_eq!(sweep.at_angle(0).unwrap().ex, ud.el, max_relative = 1e-12);

    // Symmetric about the fiber axis
    for angle in 1..90 {
        let plus = sweep.at_angle(angle).unwrap();
        let minus = sweep.at_angle(-angle).unwrap();
        assert_relative_eq!(plus.ex, minus.ex, max_relative = 1e-9);
        assert_relative_eq!(plus.gxy, minus.gxy, max_relative = 1e-9);
        assert_relative_eq!(plus.nuxy, minus.nuxy, max_relative = 1e-9);
    }

    // Ex falls monotonically from the fiber axis until it bottoms out off-axis
    let ex_min = sweep.ex.iter().cloned().fold(f64::INFINITY, f64::min);
    assert!(ex_min < ud.et * 1.0001);
    assert!(sweep.ex.iter().all(|&ex| ex <= ud.el * (1.0 + 1e-12)));
}

#[test]
fn glass_epoxy_vf_trends() {
    let step = env_i32("PLY_VF_STEP", 10);
    let mut previous: Option<UnidirectionalProperties> = None;

    for percent in (step..100).step_by(step as usize) {
        let mut input = PlyInput::glass_epoxy();
        input.fiber_volume_percent = percent as f64;
        let ply = Ply::new(input).unwrap();
        let ud = ply.self_consistent();

        let fractions = ply.mass_fractions().unwrap();
        assert_relative_eq!(fractions.mf + fractions.mm, 1.0, epsilon = 1e-15);
        assert_eq!(ply.vm(), 1.0 - ply.vf());

        if let Some(prev) = previous {
            assert!(ud.el > prev.el, "El should grow with Vf");
            assert!(ud.et > prev.et, "Et should grow with Vf");
            assert!(ud.glt > prev.glt, "Glt should grow with Vf");
        }
        previous = Some(ud);
    }
}

#[test]
fn glass_epoxy_from_csv_table() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("renfort_matrice.csv");
    std::fs::write(
        &path,
        "Composant,El,Et,Glt,Nult,Rho,Msf,Vf,Tissu,Equilibrage\n\
         Epoxy,3450,0,1300,0.4,1200,0,50,1,Chaine\n\
         Verre E,72000,72000,29508,0.22,2550,300,50,1,Trame\n",
    )
    .unwrap();

    let table = io::load_table(&path).unwrap();
    let ply = Ply::from_columns(&table.columns).unwrap();
    assert_eq!(ply.input(), PlyInput::glass_epoxy());

    let report = ply.report(1.0).unwrap();
    let text = io::render_report(&ply.input(), &report, &table.labels, None);
    assert!(text.contains("Epoxy"));
    assert!(text.contains("Verre E"));
    assert!(text.contains("Chaine = 1"));
}

#[test]
fn zero_fiber_limit_has_no_thickness() {
    let mut columns = glass_epoxy_columns();
    columns.vf = 1e-320;
    let ply = Ply::from_columns(&columns).unwrap();
    assert!(matches!(
        ply.thickness(),
        Err(PlyError::UndefinedThickness { .. })
    ));
}

#[test]
#[ignore]
fn glass_epoxy_sweep_report_csv() {
    // Run with:
    //   cargo test glass_epoxy_sweep_report_csv -- --ignored --nocapture
    let step = env_i32("PLY_SWEEP_STEP", 5);
    let ply = Ply::new(PlyInput::glass_epoxy()).unwrap();
    let sweep = angle_sweep(&ply, &SweepOptions::default().with_step(step)).unwrap();

    println!("angle,ex,ey,gxy,nuxy");
    for s in sweep.samples() {
        println!(
            "{},{:.3},{:.3},{:.3},{:.5}",
            s.angle, s.ex, s.ey, s.gxy, s.nuxy
        );
    }
}
