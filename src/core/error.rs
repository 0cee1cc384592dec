use std::fmt::Display;

pub type Result<T> = std::result::Result<T, ContainerError>;

/// Container level errors.
/// Reported immediately to the caller, the container never retries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContainerError {
    /// Container holds no elements so there is nothing to read.
    Empty { ty: TypeInfo },
}

impl ContainerError {
    pub fn empty<T: ?Sized>() -> Self {
        Self::Empty {
            ty: TypeInfo::of::<T>(),
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, Self::Empty { .. })
    }

    /// Element type of the container that raised the error.
    pub fn ty(&self) -> TypeInfo {
        match self {
            Self::Empty { ty } => *ty,
        }
    }
}

impl Display for ContainerError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Empty { ty } => write!(f, "Container of {} holds no elements.", ty),
        }
    }
}

impl std::error::Error for ContainerError {}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TypeInfo {
    pub ty_name: &'static str,
}

impl TypeInfo {
    pub fn of<T: ?Sized>() -> Self {
        Self {
            ty_name: std::any::type_name::<T>(),
        }
    }

    /// Last path segment of the type name.
    pub fn short_name(&self) -> &'static str {
        let name = self.ty_name.split('<').next().unwrap_or(self.ty_name);
        name.rsplit("::").next().unwrap_or(name)
    }
}

impl Display for TypeInfo {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.ty_name)
    }
}
