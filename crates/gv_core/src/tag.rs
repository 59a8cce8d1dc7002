//! Type descriptors for the closed type set.
//!
//! One tag per member of the set the container can hold. The tag is what the
//! capability registry reasons about; the payload itself never leaves the
//! engine crate.

/// Discriminant of the currently held type.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TypeTag {
    Bool,
    Int,
    Float,
    Double,
    Complex32,
    Complex64,
    BoolVec,
    IntVec,
    FloatVec,
    DoubleVec,
    Complex32Vec,
    Complex64Vec,
    Str,
    Ref,
}

impl TypeTag {
    /// Human-readable name, used only when building diagnostics.
    pub fn name(self) -> &'static str {
        match self {
            TypeTag::Bool => "bool",
            TypeTag::Int => "int",
            TypeTag::Float => "float",
            TypeTag::Double => "double",
            TypeTag::Complex32 => "complex<float>",
            TypeTag::Complex64 => "complex<double>",
            TypeTag::BoolVec => "vector<bool>",
            TypeTag::IntVec => "vector<int>",
            TypeTag::FloatVec => "vector<float>",
            TypeTag::DoubleVec => "vector<double>",
            TypeTag::Complex32Vec => "vector<complex<float>>",
            TypeTag::Complex64Vec => "vector<complex<double>>",
            TypeTag::Str => "string",
            TypeTag::Ref => "ref<double>",
        }
    }

    /// Position in the numeric promotion lattice, `None` for non-numeric
    /// members. bool < int < float < double < complex<float> < complex<double>.
    pub fn numeric_rank(self) -> Option<u8> {
        match self {
            TypeTag::Bool => Some(0),
            TypeTag::Int => Some(1),
            TypeTag::Float => Some(2),
            TypeTag::Double => Some(3),
            TypeTag::Complex32 => Some(4),
            TypeTag::Complex64 => Some(5),
            _ => None,
        }
    }

    pub fn is_integral(self) -> bool {
        matches!(self, TypeTag::Bool | TypeTag::Int)
    }

    /// Real (non-complex) numeric scalar.
    pub fn is_real_scalar(self) -> bool {
        matches!(self.numeric_rank(), Some(r) if r <= 3)
    }

    pub fn is_vector(self) -> bool {
        matches!(
            self,
            TypeTag::BoolVec
                | TypeTag::IntVec
                | TypeTag::FloatVec
                | TypeTag::DoubleVec
                | TypeTag::Complex32Vec
                | TypeTag::Complex64Vec
        )
    }

    /// Vectors whose element type carries a native ordering. Complex elements
    /// compare only for equality, so their vectors do too.
    pub fn is_ordered_vector(self) -> bool {
        matches!(
            self,
            TypeTag::BoolVec | TypeTag::IntVec | TypeTag::FloatVec | TypeTag::DoubleVec
        )
    }

    pub const ALL: [TypeTag; 14] = [
        TypeTag::Bool,
        TypeTag::Int,
        TypeTag::Float,
        TypeTag::Double,
        TypeTag::Complex32,
        TypeTag::Complex64,
        TypeTag::BoolVec,
        TypeTag::IntVec,
        TypeTag::FloatVec,
        TypeTag::DoubleVec,
        TypeTag::Complex32Vec,
        TypeTag::Complex64Vec,
        TypeTag::Str,
        TypeTag::Ref,
    ];
}
