// @generated by `forma expand` from cars.toml. Do not edit.
# [derive (:: core :: fmt :: Debug , :: core :: clone :: Clone , :: core :: cmp :: PartialEq)] pub struct Engine { cylinders : i64 , } impl Engine { # [doc = r" Fully qualified type name."] pub const NAME : & 'static str = :: core :: concat ! (:: core :: module_path ! () , "::" , "Engine") ; # [doc = r" Declared field names, in declaration order."] pub const FIELD_NAMES : & 'static [& 'static str] = & ["cylinders"] ; # [doc = r" Validates `fields` and builds an instance."] # [doc = r""] # [doc = r" Every declared field is checked; the error lists each one"] # [doc = r" that was missing or rejected."] pub fn new (fields : impl :: core :: convert :: Into < :: forma :: Fields > ,) -> :: forma :: Result < Self > { < Self as :: forma :: TypedStruct > :: from_fields (fields . into ()) } # [doc = "Returns `cylinders`."] pub fn cylinders (& self) -> & i64 { & self . cylinders } # [doc = "Returns a copy with `cylinders` replaced, if `value` passes the field's checks."] pub fn set_cylinders (& self , value : i64) -> :: forma :: Result < Self > { let schema = < Self as :: forma :: TypedStruct > :: schema () ; schema . check_field ("cylinders" , & :: forma :: IntoValue :: into_value (:: core :: clone :: Clone :: clone (& value)) ,) ? ; let mut next = :: core :: clone :: Clone :: clone (self) ; next . cylinders = value ; :: core :: result :: Result :: Ok (next) } } impl :: core :: default :: Default for Engine { fn default () -> Self { Self { cylinders : 4 , } } } impl :: forma :: TypedStruct for Engine { const NAME : & 'static str = Engine :: NAME ; const FIELD_NAMES : & 'static [& 'static str] = Engine :: FIELD_NAMES ; fn schema () -> & 'static :: std :: sync :: Arc < :: forma :: StructSchema > { static SCHEMA : :: std :: sync :: LazyLock < :: std :: sync :: Arc < :: forma :: StructSchema >> = :: std :: sync :: LazyLock :: new (|| { :: std :: sync :: Arc :: new (:: forma :: StructSchema :: new (Engine :: NAME) . field (:: forma :: FieldSpec :: new ("cylinders" , :: forma :: Guard :: new ("forma::guards::is_positive_integer" , forma :: guards :: is_positive_integer)) . nullable (false) . converts (:: forma :: Conversion :: to :: < i64 > ()))) }) ; :: std :: sync :: LazyLock :: force (& SCHEMA) } fn from_fields (__forma_fields : :: forma :: Fields) -> :: forma :: Result < Self > { let __forma_schema = < Self as :: forma :: TypedStruct > :: schema () ; let mut __forma_reader = :: forma :: FieldReader :: new (__forma_schema , & __forma_fields) ; let __forma_cylinders = __forma_reader . read :: < i64 > ("cylinders") ; __forma_reader . finish () ? ; :: core :: result :: Result :: Ok (Self { cylinders : __forma_cylinders . unwrap_or_else (|| 4) , }) } fn to_fields (& self) -> :: forma :: Fields { let mut fields = :: forma :: Fields :: with_capacity (1usize) ; fields . insert ("cylinders" , :: core :: clone :: Clone :: clone (& self . cylinders)) ; fields } fn get_field (& self , name : & str) -> :: core :: option :: Option < :: forma :: Value > { match name { "cylinders" => :: core :: option :: Option :: Some (:: forma :: IntoValue :: into_value (:: core :: clone :: Clone :: clone (& self . cylinders) ,)) , _ => :: core :: option :: Option :: None , } } fn put_field (& self , name : & str , value : :: forma :: Value) -> :: forma :: Result < Self > { let schema = < Self as :: forma :: TypedStruct > :: schema () ; match name { "cylinders" => { let mut next = :: core :: clone :: Clone :: clone (self) ; next . cylinders = schema . accept :: < i64 > ("cylinders" , & value) ? ; :: core :: result :: Result :: Ok (next) } _ => :: core :: result :: Result :: Err (:: forma :: Error :: UnknownField { strukt : :: std :: borrow :: ToOwned :: to_owned (Engine :: NAME) , field : :: std :: borrow :: ToOwned :: to_owned (name) , }) , } } } impl :: forma :: FromValue for Engine { fn from_value (value : & :: forma :: Value) -> :: forma :: Result < Self > { < Self as :: forma :: TypedStruct > :: instance_of (value) } } impl :: forma :: IntoValue for Engine { fn into_value (self) -> :: forma :: Value { let fields = < Self as :: forma :: TypedStruct > :: to_fields (& self) ; :: forma :: Value :: Struct (:: forma :: StructValue :: new (Engine :: NAME , fields)) } } # [doc = "A car with a nested engine."] # [derive (:: core :: fmt :: Debug , :: core :: clone :: Clone , :: core :: cmp :: PartialEq)] pub struct Car { year : i64 , nickname : Option < String > , engine : Engine , } impl Car { # [doc = r" Fully qualified type name."] pub const NAME : & 'static str = :: core :: concat ! (:: core :: module_path ! () , "::" , "Car") ; # [doc = r" Declared field names, in declaration order."] pub const FIELD_NAMES : & 'static [& 'static str] = & ["year" , "nickname" , "engine"] ; # [doc = r" Validates `fields` and builds an instance."] # [doc = r""] # [doc = r" Every declared field is checked; the error lists each one"] # [doc = r" that was missing or rejected."] pub fn new (fields : impl :: core :: convert :: Into < :: forma :: Fields > ,) -> :: forma :: Result < Self > { < Self as :: forma :: TypedStruct > :: from_fields (fields . into ()) } # [doc = "Returns `year`."] pub fn year (& self) -> & i64 { & self . year } # [doc = "Returns a copy with `year` replaced, if `value` passes the field's checks."] pub fn set_year (& self , value : i64) -> :: forma :: Result < Self > { let schema = < Self as :: forma :: TypedStruct > :: schema () ; schema . check_field ("year" , & :: forma :: IntoValue :: into_value (:: core :: clone :: Clone :: clone (& value)) ,) ? ; let mut next = :: core :: clone :: Clone :: clone (self) ; next . year = value ; :: core :: result :: Result :: Ok (next) } # [doc = "Returns `nickname`."] pub fn nickname (& self) -> & Option < String > { & self . nickname } # [doc = "Returns a copy with `nickname` replaced, if `value` passes the field's checks."] pub fn set_nickname (& self , value : Option < String >) -> :: forma :: Result < Self > { let schema = < Self as :: forma :: TypedStruct > :: schema () ; schema . check_field ("nickname" , & :: forma :: IntoValue :: into_value (:: core :: clone :: Clone :: clone (& value)) ,) ? ; let mut next = :: core :: clone :: Clone :: clone (self) ; next . nickname = value ; :: core :: result :: Result :: Ok (next) } # [doc = "Returns `engine`."] pub fn engine (& self) -> & Engine { & self . engine } # [doc = "Returns a copy with `engine` replaced, if `value` passes the field's checks."] pub fn set_engine (& self , value : Engine) -> :: forma :: Result < Self > { let schema = < Self as :: forma :: TypedStruct > :: schema () ; schema . check_field ("engine" , & :: forma :: IntoValue :: into_value (:: core :: clone :: Clone :: clone (& value)) ,) ? ; let mut next = :: core :: clone :: Clone :: clone (self) ; next . engine = value ; :: core :: result :: Result :: Ok (next) } } impl :: core :: default :: Default for Car { fn default () -> Self { Self { year : 2 , nickname : :: core :: default :: Default :: default () , engine : :: core :: default :: Default :: default () , } } } impl :: forma :: TypedStruct for Car { const NAME : & 'static str = Car :: NAME ; const FIELD_NAMES : & 'static [& 'static str] = Car :: FIELD_NAMES ; fn schema () -> & 'static :: std :: sync :: Arc < :: forma :: StructSchema > { static SCHEMA : :: std :: sync :: LazyLock < :: std :: sync :: Arc < :: forma :: StructSchema >> = :: std :: sync :: LazyLock :: new (|| { :: std :: sync :: Arc :: new (:: forma :: StructSchema :: new (Car :: NAME) . field (:: forma :: FieldSpec :: new ("year" , :: forma :: Guard :: new ("forma::guards::is_integer" , forma :: guards :: is_integer)) . nullable (false) . converts (:: forma :: Conversion :: to :: < i64 > ())) . field (:: forma :: FieldSpec :: new ("nickname" , :: forma :: Guard :: accepts :: < String > ()) . nullable (true)) . field (:: forma :: FieldSpec :: new ("engine" , :: forma :: Guard :: accepts :: < Engine > ()) . nullable (false) . nested (:: std :: sync :: Arc :: clone (< Engine as :: forma :: TypedStruct > :: schema () ,)))) }) ; :: std :: sync :: LazyLock :: force (& SCHEMA) } fn from_fields (__forma_fields : :: forma :: Fields) -> :: forma :: Result < Self > { let __forma_schema = < Self as :: forma :: TypedStruct > :: schema () ; let mut __forma_reader = :: forma :: FieldReader :: new (__forma_schema , & __forma_fields) ; let __forma_year = __forma_reader . read :: < i64 > ("year") ; let __forma_nickname = __forma_reader . read :: < Option < String > > ("nickname") ; let __forma_engine = __forma_reader . read :: < Engine > ("engine") ; __forma_reader . finish () ? ; :: core :: result :: Result :: Ok (Self { year : __forma_year . unwrap_or_else (|| 2) , nickname : __forma_nickname . unwrap_or_else (|| :: core :: default :: Default :: default ()) , engine : __forma_engine . unwrap_or_else (|| :: core :: default :: Default :: default ()) , }) } fn to_fields (& self) -> :: forma :: Fields { let mut fields = :: forma :: Fields :: with_capacity (3usize) ; fields . insert ("year" , :: core :: clone :: Clone :: clone (& self . year)) ; fields . insert ("nickname" , :: core :: clone :: Clone :: clone (& self . nickname)) ; fields . insert ("engine" , :: core :: clone :: Clone :: clone (& self . engine)) ; fields } fn get_field (& self , name : & str) -> :: core :: option :: Option < :: forma :: Value > { match name { "year" => :: core :: option :: Option :: Some (:: forma :: IntoValue :: into_value (:: core :: clone :: Clone :: clone (& self . year) ,)) , "nickname" => :: core :: option :: Option :: Some (:: forma :: IntoValue :: into_value (:: core :: clone :: Clone :: clone (& self . nickname) ,)) , "engine" => :: core :: option :: Option :: Some (:: forma :: IntoValue :: into_value (:: core :: clone :: Clone :: clone (& self . engine) ,)) , _ => :: core :: option :: Option :: None , } } fn put_field (& self , name : & str , value : :: forma :: Value) -> :: forma :: Result < Self > { let schema = < Self as :: forma :: TypedStruct > :: schema () ; match name { "year" => { let mut next = :: core :: clone :: Clone :: clone (self) ; next . year = schema . accept :: < i64 > ("year" , & value) ? ; :: core :: result :: Result :: Ok (next) } "nickname" => { let mut next = :: core :: clone :: Clone :: clone (self) ; next . nickname = schema . accept :: < Option < String > > ("nickname" , & value) ? ; :: core :: result :: Result :: Ok (next) } "engine" => { let mut next = :: core :: clone :: Clone :: clone (self) ; next . engine = schema . accept :: < Engine > ("engine" , & value) ? ; :: core :: result :: Result :: Ok (next) } _ => :: core :: result :: Result :: Err (:: forma :: Error :: UnknownField { strukt : :: std :: borrow :: ToOwned :: to_owned (Car :: NAME) , field : :: std :: borrow :: ToOwned :: to_owned (name) , }) , } } } impl :: forma :: FromValue for Car { fn from_value (value : & :: forma :: Value) -> :: forma :: Result < Self > { < Self as :: forma :: TypedStruct > :: instance_of (value) } } impl :: forma :: IntoValue for Car { fn into_value (self) -> :: forma :: Value { let fields = < Self as :: forma :: TypedStruct > :: to_fields (& self) ; :: forma :: Value :: Struct (:: forma :: StructValue :: new (Car :: NAME , fields)) } }
