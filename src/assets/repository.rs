use crate::assets::domain::model::AssetEntity;
use crate::core::repository::Repository;
use crate::core::repository::ddb_repository::DDBRepository;
use crate::core::repository::memory_repository::MemoryRepository;

pub trait AssetRepository: Repository<AssetEntity> {}

impl AssetRepository for DDBRepository<AssetEntity> {}

impl AssetRepository for MemoryRepository<AssetEntity> {}
