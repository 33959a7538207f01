use cofactor::solver::{CholeskySolver, InverseSolver, LinearSolver};
use cofactor::{Matrix, Vector};

fn main() {
    let n = 5;
    // build an SPD matrix: A = MᵀM + I
    let m = Matrix::from_fn(n, n, |i, j| ((i + 2 * j) as f64).sin());
    let a = m
        .transpose()
        .multiply_matrix(&m)
        .and_then(|mtm| mtm.add_matrix(&Matrix::identity(n)))
        .expect("shapes agree");
    print!("A =\n{a}");
    println!("det(A) = {:.6}", a.determinant().expect("A is square"));

    // rhs
    let b: Vector<f64> = (0..n).map(|i| i as f64 + 1.0).collect();
    let mut x = Vector::new();

    // adjugate inverse
    let mut inv = InverseSolver::new();
    inv.solve(&a, &b, &mut x).expect("A is non-singular");
    println!("inverse  x = {x}");

    // Cholesky
    let mut chol = CholeskySolver::new();
    chol.solve(&a, &b, &mut x).expect("A is positive-definite");
    println!("cholesky x = {x}");
    if let Some(l) = chol.factor() {
        print!("L =\n{l}");
    }
}
