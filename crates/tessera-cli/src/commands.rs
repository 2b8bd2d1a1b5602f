//! CLI command implementations.

use std::collections::BTreeMap;
use std::path::Path;

use tessera_io::{export, read_mesh, ExportFormat, MergePlan};
use tessera_mesh::TriangleMesh;

/// Merge a plan and write the result.
pub fn merge(
    plan_path: &str,
    output_path: &str,
    binary: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    println!("Tessera Merge");
    println!("─────────────");
    println!("Plan:   {plan_path}");
    println!("Output: {output_path}");
    println!();

    let plan = MergePlan::load(plan_path)?;
    let merged = plan.build()?;

    // Stream sizes, straight from the merge.
    let triangles = merged.triangles();
    println!("Components:  {}", merged.len());
    println!("Vertices:    {}", triangles.vertex_count());
    println!("Triangles:   {}", tessera_mesh::count(triangles));

    let output = Path::new(output_path);
    let format = if binary {
        ExportFormat::Binary
    } else {
        ExportFormat::from_path(output)
    };
    let summary = export(&merged, output, format)?;
    println!();
    println!(
        "✅ Wrote {} bytes ({} verts, {} tris) to {output_path}",
        summary.bytes, summary.vertex_count, summary.triangle_count
    );

    Ok(())
}

/// Inspect an exported mesh.
pub fn inspect(path: &str) -> Result<(), Box<dyn std::error::Error>> {
    println!("Tessera Mesh Inspector");
    println!("──────────────────────");
    println!();

    let mesh = read_mesh(path)?;

    println!("Vertices:   {}", mesh.vertex_count());
    println!("Triangles:  {}", mesh.triangle_count());

    if mesh.vertex_count() > 0 {
        let [min, max] = bounds(&mesh);
        println!(
            "Bounds:     [{:.4}, {:.4}, {:.4}] .. [{:.4}, {:.4}, {:.4}]",
            min[0], min[1], min[2], max[0], max[1], max[2]
        );
    }

    let mut materials: BTreeMap<u16, usize> = BTreeMap::new();
    for id in &mesh.material_ids {
        *materials.entry(id.0).or_default() += 1;
    }
    for (id, n) in materials {
        println!("Material {id}: {n} tris");
    }

    Ok(())
}

/// Validate a plan or a mesh.
pub fn validate(path: &str) -> Result<(), Box<dyn std::error::Error>> {
    println!("Tessera Validator");
    println!("─────────────────");
    println!();

    if path.ends_with(".toml") {
        println!("Validating plan: {path}");
        let merged = MergePlan::load(path)?.build()?;
        let n = tessera_mesh::count(merged.vertices());
        println!("✅ Plan is valid ({} components, {n} verts).", merged.len());
    } else if path.ends_with(".json") || path.ends_with(".bin") {
        println!("Validating mesh: {path}");
        match read_mesh(path) {
            Ok(mesh) => println!(
                "✅ Mesh is valid ({} verts, {} tris).",
                mesh.vertex_count(),
                mesh.triangle_count()
            ),
            Err(e) => println!("❌ Mesh validation failed: {e}"),
        }
    } else {
        println!("Unsupported file format. Use .toml (plan), .json or .bin (mesh).");
    }

    Ok(())
}

fn bounds(mesh: &TriangleMesh) -> [[f32; 3]; 2] {
    let mut min = [f32::INFINITY; 3];
    let mut max = [f32::NEG_INFINITY; 3];
    for i in 0..mesh.vertex_count() {
        let p = mesh.position(i);
        for axis in 0..3 {
            min[axis] = min[axis].min(p[axis]);
            max[axis] = max[axis].max(p[axis]);
        }
    }
    [min, max]
}
