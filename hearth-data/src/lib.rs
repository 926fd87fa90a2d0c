pub mod material {
    include!(concat!(env!("OUT_DIR"), "/material.rs"));

    impl Material {
        pub const fn is_air(&self) -> bool {
            matches!(self, Self::Air)
        }
    }

    impl std::fmt::Display for Material {
        fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
            f.write_str(self.to_name())
        }
    }
}

pub mod inventory_type {
    include!(concat!(env!("OUT_DIR"), "/inventory_type.rs"));
}

pub use inventory_type::InventoryType;
pub use material::Material;
